//! Peer type registry and constructor overload resolution

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::domain::value_objects::{ParamType, PeerTypeName, Toolkit};
use crate::domain::{InstantiationFailure, PeerError};
use crate::toolkit::NativeWidget;

use super::args::{Arguments, FactoryArg, TypeLattice};

type ConstructorFn = dyn Fn(&Arguments<'_>) -> Result<Rc<dyn NativeWidget>, PeerError>;

/// One overload of a peer type's constructor
#[derive(Clone)]
pub struct Constructor {
    signature: Vec<ParamType>,
    build: Rc<ConstructorFn>,
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl Constructor {
    pub fn signature(&self) -> &[ParamType] {
        &self.signature
    }

    /// Whether every argument is assignable to the declared parameter
    pub fn accepts(&self, lattice: &TypeLattice, arg_types: &[ParamType]) -> bool {
        self.signature.len() == arg_types.len()
            && self
                .signature
                .iter()
                .zip(arg_types)
                .all(|(param, arg)| lattice.is_assignable(*arg, *param))
    }

    /// Whether this overload is at least as specific as `other` in every position
    fn is_at_least_as_specific(&self, other: &Constructor, lattice: &TypeLattice) -> bool {
        self.signature
            .iter()
            .zip(&other.signature)
            .all(|(mine, theirs)| lattice.is_assignable(*mine, *theirs))
    }

    pub fn invoke(
        &self,
        type_name: &PeerTypeName,
        args: &[FactoryArg],
    ) -> Result<Rc<dyn NativeWidget>, PeerError> {
        (self.build)(&Arguments::new(type_name, &self.signature, args))
    }
}

/// A registered peer type
#[derive(Clone, Debug)]
pub struct PeerType {
    name: PeerTypeName,
    base: Toolkit,
    peer_contract: bool,
    constructors: Vec<Constructor>,
}

impl PeerType {
    /// A native widget type of `base` that implements the peer contract
    pub fn peer(name: impl Into<PeerTypeName>, base: Toolkit) -> Self {
        Self {
            name: name.into(),
            base,
            peer_contract: true,
            constructors: Vec::new(),
        }
    }

    /// A plain native widget type that cannot serve as a peer
    pub fn widget(name: impl Into<PeerTypeName>, base: Toolkit) -> Self {
        Self {
            peer_contract: false,
            ..Self::peer(name, base)
        }
    }

    /// Add a constructor overload accepting `signature`
    pub fn constructor<F>(mut self, signature: &[ParamType], build: F) -> Self
    where
        F: Fn(&Arguments<'_>) -> Result<Rc<dyn NativeWidget>, PeerError> + 'static,
    {
        self.constructors.push(Constructor {
            signature: signature.to_vec(),
            build: Rc::new(build),
        });
        self
    }

    pub fn name(&self) -> &PeerTypeName {
        &self.name
    }

    pub fn base(&self) -> Toolkit {
        self.base
    }

    pub fn implements_peer_contract(&self) -> bool {
        self.peer_contract
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// Pick the most specific constructor accepting `arg_types`
    ///
    /// A constructor wins when it is at least as specific as every other
    /// applicable one in each parameter position. If no single constructor
    /// does, the call is ambiguous and fails with all applicable signatures.
    pub fn resolve(
        &self,
        lattice: &TypeLattice,
        arg_types: &[ParamType],
    ) -> Result<&Constructor, PeerError> {
        let applicable: Vec<&Constructor> = self
            .constructors
            .iter()
            .filter(|c| c.accepts(lattice, arg_types))
            .collect();

        if applicable.is_empty() {
            return Err(PeerError::instantiation(
                self.name.clone(),
                InstantiationFailure::NoMatchingConstructor {
                    attempted: arg_types.to_vec(),
                },
            ));
        }

        let most_specific = applicable.iter().find(|candidate| {
            applicable
                .iter()
                .all(|other| candidate.is_at_least_as_specific(other, lattice))
        });

        match most_specific {
            Some(constructor) => {
                trace!(
                    peer_type = %self.name,
                    signature = ?constructor.signature,
                    candidates = applicable.len(),
                    "resolved constructor"
                );
                Ok(constructor)
            }
            None => Err(PeerError::instantiation(
                self.name.clone(),
                InstantiationFailure::AmbiguousConstructor {
                    attempted: arg_types.to_vec(),
                    candidates: applicable.iter().map(|c| c.signature.clone()).collect(),
                },
            )),
        }
    }
}

/// Peer types by name
#[derive(Clone, Debug, Default)]
pub struct PeerRegistry {
    types: HashMap<PeerTypeName, PeerType>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a peer type, replacing any previous type of the same name
    pub fn register(&mut self, peer_type: PeerType) -> Option<PeerType> {
        self.types.insert(peer_type.name.clone(), peer_type)
    }

    pub fn get(&self, name: &PeerTypeName) -> Option<&PeerType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &PeerTypeName) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::WidgetStub;

    const LIST: ParamType = ParamType::new("list");
    const SET: ParamType = ParamType::new("set");
    const ARRAY_LIST: ParamType = ParamType::new("array-list");
    const LINKED_LIST: ParamType = ParamType::new("linked-list");
    const HASH_SET: ParamType = ParamType::new("hash-set");
    const TREE_SET: ParamType = ParamType::new("tree-set");

    fn collections() -> TypeLattice {
        let mut lattice = TypeLattice::new();
        lattice
            .declare(ARRAY_LIST, &[LIST])
            .declare(LINKED_LIST, &[LIST])
            .declare(HASH_SET, &[SET])
            .declare(TREE_SET, &[SET]);
        lattice
    }

    fn stub(_: &Arguments<'_>) -> Result<Rc<dyn NativeWidget>, PeerError> {
        Ok(Rc::new(WidgetStub(Toolkit::Swing)))
    }

    fn overloaded() -> PeerType {
        PeerType::peer("collections", Toolkit::Swing)
            .constructor(&[ParamType::OBJECT, ParamType::OBJECT], stub)
            .constructor(&[LIST, SET], stub)
            .constructor(&[ARRAY_LIST, SET], stub)
            .constructor(&[LIST, HASH_SET], stub)
    }

    fn resolved(arg_types: &[ParamType]) -> Result<Vec<ParamType>, PeerError> {
        let lattice = collections();
        let peer_type = overloaded();
        peer_type
            .resolve(&lattice, arg_types)
            .map(|c| c.signature().to_vec())
    }

    #[test]
    fn test_prefers_most_specific_overload() {
        assert_eq!(resolved(&[ARRAY_LIST, TREE_SET]), Ok(vec![ARRAY_LIST, SET]));
        assert_eq!(resolved(&[LINKED_LIST, TREE_SET]), Ok(vec![LIST, SET]));
        assert_eq!(resolved(&[LINKED_LIST, HASH_SET]), Ok(vec![LIST, HASH_SET]));
        assert_eq!(
            resolved(&[ParamType::STYLE, ParamType::STYLE]),
            Ok(vec![ParamType::OBJECT, ParamType::OBJECT])
        );
    }

    #[test]
    fn test_ambiguous_overloads_fail_deterministically() {
        let err = resolved(&[ARRAY_LIST, HASH_SET]).unwrap_err();

        let Some(InstantiationFailure::AmbiguousConstructor {
            attempted,
            candidates,
        }) = err.instantiation_reason()
        else {
            panic!("expected an ambiguity, got {err:?}");
        };
        assert_eq!(attempted, &vec![ARRAY_LIST, HASH_SET]);
        assert_eq!(candidates.len(), 4);
        assert!(candidates.contains(&vec![ARRAY_LIST, SET]));
        assert!(candidates.contains(&vec![LIST, HASH_SET]));

        // same input, same error
        assert_eq!(resolved(&[ARRAY_LIST, HASH_SET]), Err(err));
    }

    #[test]
    fn test_no_matching_constructor_names_attempted_types() {
        let err = resolved(&[ARRAY_LIST]).unwrap_err();

        assert_eq!(
            err.instantiation_reason(),
            Some(&InstantiationFailure::NoMatchingConstructor {
                attempted: vec![ARRAY_LIST]
            })
        );
        assert!(err.to_string().contains("array-list"));
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = PeerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register(overloaded()).is_none());
        assert!(registry.register(overloaded()).is_some());

        let name = PeerTypeName::from("collections");
        assert!(registry.contains(&name));
        assert_eq!(registry.get(&name).map(|t| t.constructors().len()), Some(4));
        assert_eq!(registry.len(), 1);
    }
}
