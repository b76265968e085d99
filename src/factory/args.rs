//! Factory arguments and the parameter type lattice

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use crate::component::Component;
use crate::domain::value_objects::{ParamType, PeerTypeName};
use crate::domain::{InstantiationFailure, PeerError};
use crate::toolkit::NativeContainer;

/// Subtype relation between parameter types
///
/// [`ParamType::OBJECT`] is the implicit top; every other relation has to be
/// declared. The relation is reflexive and transitive.
#[derive(Clone, Debug)]
pub struct TypeLattice {
    supertypes: HashMap<ParamType, Vec<ParamType>>,
}

impl Default for TypeLattice {
    fn default() -> Self {
        let mut lattice = Self {
            supertypes: HashMap::new(),
        };
        lattice.declare(ParamType::SCROLLING_COMPONENT, &[ParamType::COMPONENT]);
        lattice
    }
}

impl TypeLattice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `ty` as a direct subtype of each of `supertypes`
    pub fn declare(&mut self, ty: ParamType, supertypes: &[ParamType]) -> &mut Self {
        let entry = self.supertypes.entry(ty).or_default();
        for supertype in supertypes {
            if !entry.contains(supertype) {
                entry.push(*supertype);
            }
        }
        self
    }

    pub fn direct_supertypes(&self, ty: ParamType) -> &[ParamType] {
        self.supertypes.get(&ty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a value of type `from` can be passed where `to` is declared
    pub fn is_assignable(&self, from: ParamType, to: ParamType) -> bool {
        if to == ParamType::OBJECT || from == to {
            return true;
        }
        let mut visited = HashSet::new();
        let mut pending = vec![from];
        while let Some(ty) = pending.pop() {
            if !visited.insert(ty) {
                continue;
            }
            for supertype in self.direct_supertypes(ty) {
                if *supertype == to {
                    return true;
                }
                pending.push(*supertype);
            }
        }
        false
    }
}

/// Style bits passed to SWT-style peer constructors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct StyleFlags(pub u32);

impl StyleFlags {
    pub const NONE: StyleFlags = StyleFlags(0);
}

/// One argument for a peer constructor, tagged with its runtime type
#[derive(Clone)]
pub struct FactoryArg {
    ty: ParamType,
    value: Rc<dyn Any>,
}

impl fmt::Debug for FactoryArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryArg").field("ty", &self.ty).finish_non_exhaustive()
    }
}

impl FactoryArg {
    pub fn new<T: Any>(ty: ParamType, value: T) -> Self {
        Self {
            ty,
            value: Rc::new(value),
        }
    }

    pub fn component(component: &Rc<Component>, ty: ParamType) -> Self {
        Self::new(ty, component.clone())
    }

    pub fn container(container: Rc<dyn NativeContainer>) -> Self {
        Self::new(ParamType::NATIVE_CONTAINER, container)
    }

    pub fn style(style: StyleFlags) -> Self {
        Self::new(ParamType::STYLE, style)
    }

    pub fn ty(&self) -> ParamType {
        self.ty
    }

    pub fn downcast<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

/// Arguments as seen by a constructor, checked against its declared signature
pub struct Arguments<'a> {
    type_name: &'a PeerTypeName,
    signature: &'a [ParamType],
    args: &'a [FactoryArg],
}

impl<'a> Arguments<'a> {
    pub(crate) fn new(type_name: &'a PeerTypeName, signature: &'a [ParamType], args: &'a [FactoryArg]) -> Self {
        Self {
            type_name,
            signature,
            args,
        }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn type_name(&self) -> &PeerTypeName {
        self.type_name
    }

    /// The argument at `index` as a `T`
    pub fn get<T: Any>(&self, index: usize) -> Result<&'a T, PeerError> {
        self.args
            .get(index)
            .and_then(|arg| arg.value.downcast_ref::<T>())
            .ok_or_else(|| self.mismatch(index))
    }

    pub fn component(&self, index: usize) -> Result<Rc<Component>, PeerError> {
        self.get::<Rc<Component>>(index).cloned()
    }

    pub fn container(&self, index: usize) -> Result<Rc<dyn NativeContainer>, PeerError> {
        self.get::<Rc<dyn NativeContainer>>(index).cloned()
    }

    pub fn style(&self, index: usize) -> Result<StyleFlags, PeerError> {
        self.get::<StyleFlags>(index).copied()
    }

    fn mismatch(&self, index: usize) -> PeerError {
        PeerError::instantiation(
            self.type_name.clone(),
            InstantiationFailure::ArgumentMismatch {
                index,
                expected: self
                    .signature
                    .get(index)
                    .copied()
                    .unwrap_or(ParamType::OBJECT),
            },
        )
    }
}
