//! Parameter types and peer type names used by the component factory
//!
//! Peer constructors declare the parameter types they accept; factory
//! arguments carry the runtime type they were created with. Assignability
//! between the two is decided by the factory's type lattice.

use std::borrow::Cow;
use std::fmt;

/// A named parameter type in the factory's type lattice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamType(&'static str);

impl ParamType {
    /// Top of the lattice; every type is assignable to it
    pub const OBJECT: ParamType = ParamType("object");
    pub const COMPONENT: ParamType = ParamType("component");
    pub const SCROLLING_COMPONENT: ParamType = ParamType("scrolling-component");
    pub const NATIVE_CONTAINER: ParamType = ParamType("native-container");
    pub const STYLE: ParamType = ParamType("style");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Render a parameter list as `a, b, c`
pub fn join_types(types: &[ParamType]) -> String {
    types
        .iter()
        .map(ParamType::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Identifier a component uses to name the peer type it wants
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerTypeName(Cow<'static, str>);

impl PeerTypeName {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for PeerTypeName {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for PeerTypeName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for PeerTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
