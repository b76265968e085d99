//! Domain layer error types
//!
//! All errors that can occur while binding peers, resolving constructors and
//! driving scroll state. Every failure is reported to the caller; nothing here
//! is retried.

use thiserror::Error;

use super::value_objects::{join_types, ParamType, PeerTypeName, Toolkit};

/// Main peer error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeerError {
    /// A peer could not be created for the requested type
    #[error("Cannot instantiate peer type '{type_name}': {reason}")]
    Instantiation {
        type_name: PeerTypeName,
        reason: InstantiationFailure,
    },

    /// Operation needs a capability the bound peer or component does not provide
    #[error("Unsupported capability: {0}")]
    UnsupportedCapability(String),

    /// Component already holds a peer of another toolkit
    #[error("Illegal rebinding: component is bound to a {bound} peer, cannot bind a {requested} peer")]
    IllegalRebinding { bound: Toolkit, requested: Toolkit },

    /// Operation needs a bound peer
    #[error("Component has no bound peer")]
    NotBound,

    /// Offset outside the scrollable range under the reject policy
    #[error("Invalid scroll offset ({x}, {y})")]
    InvalidOffset { x: i32, y: i32 },
}

impl PeerError {
    pub fn instantiation(type_name: impl Into<PeerTypeName>, reason: InstantiationFailure) -> Self {
        PeerError::Instantiation {
            type_name: type_name.into(),
            reason,
        }
    }

    pub fn unsupported(what: impl Into<String>) -> Self {
        PeerError::UnsupportedCapability(what.into())
    }

    /// Reason of an instantiation failure, if this is one
    pub fn instantiation_reason(&self) -> Option<&InstantiationFailure> {
        match self {
            PeerError::Instantiation { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Why a peer type could not be instantiated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstantiationFailure {
    #[error("type is not registered")]
    TypeNotFound,

    #[error("not a {expected} widget type (its base is {found})")]
    NotNativeWidget { expected: Toolkit, found: Toolkit },

    #[error("constructed widget does not implement the peer contract")]
    MissingPeerContract,

    #[error("no constructor accepts ({})", join_types(.attempted))]
    NoMatchingConstructor { attempted: Vec<ParamType> },

    #[error(
        "constructor call ({}) is ambiguous between {}",
        join_types(.attempted),
        join_signatures(.candidates)
    )]
    AmbiguousConstructor {
        attempted: Vec<ParamType>,
        candidates: Vec<Vec<ParamType>>,
    },

    #[error("creation context is for {found}, factory creates {expected} peers")]
    ContextMismatch { expected: Toolkit, found: Toolkit },

    #[error("argument {index} is not a {expected}")]
    ArgumentMismatch { index: usize, expected: ParamType },

    #[error("constructor failed: {0}")]
    ConstructorFailed(String),
}

fn join_signatures(signatures: &[Vec<ParamType>]) -> String {
    signatures
        .iter()
        .map(|s| format!("({})", join_types(s)))
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_attempted_types() {
        let err = PeerError::instantiation(
            "custom.peer",
            InstantiationFailure::NoMatchingConstructor {
                attempted: vec![ParamType::COMPONENT, ParamType::STYLE],
            },
        );

        assert_eq!(
            err.to_string(),
            "Cannot instantiate peer type 'custom.peer': no constructor accepts (component, style)"
        );
    }

    #[test]
    fn test_ambiguous_message() {
        let reason = InstantiationFailure::AmbiguousConstructor {
            attempted: vec![ParamType::new("a")],
            candidates: vec![vec![ParamType::new("b")], vec![ParamType::new("c")]],
        };

        assert_eq!(
            reason.to_string(),
            "constructor call (a) is ambiguous between (b) and (c)"
        );
    }

    #[test]
    fn test_instantiation_reason() {
        let err = PeerError::instantiation("x", InstantiationFailure::TypeNotFound);
        assert_eq!(
            err.instantiation_reason(),
            Some(&InstantiationFailure::TypeNotFound)
        );
        assert_eq!(PeerError::NotBound.instantiation_reason(), None);
    }
}
