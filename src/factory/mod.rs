//! Component factory
//!
//! Binds abstract components to toolkit peers. The factory asks the component
//! which peer type it wants, finds the type in its registry, checks that it is
//! a native widget of the right toolkit implementing the peer contract, and
//! calls the most specific constructor for the assembled arguments. The new
//! peer gets one native forwarder per listener category.

pub mod args;
pub mod registry;

use std::rc::Rc;

use tracing::{debug, trace};

use crate::component::Component;
use crate::domain::value_objects::Toolkit;
use crate::domain::{InstantiationFailure, PeerError};
use crate::input::{create_forwarder, ListenerCategory};
use crate::scrolling::{scrolling_peer_types, OffsetPolicy};
use crate::shared::config::PeerkitConfig;
use crate::toolkit::default_peer::default_peer_types;
use crate::toolkit::{NativeContainer, Peer};

pub use args::{Arguments, FactoryArg, StyleFlags, TypeLattice};
pub use registry::{Constructor, PeerRegistry, PeerType};

/// Where a new peer is created
#[derive(Clone)]
pub enum CreationContext {
    /// Swing-style peers are free floating until added to a container
    Swing {
        parent: Option<Rc<dyn NativeContainer>>,
    },
    /// SWT-style widgets are created inside their parent with style bits
    Swt {
        parent: Rc<dyn NativeContainer>,
        style: StyleFlags,
    },
}

impl CreationContext {
    pub fn swing() -> Self {
        CreationContext::Swing { parent: None }
    }

    pub fn swing_in(parent: Rc<dyn NativeContainer>) -> Self {
        CreationContext::Swing {
            parent: Some(parent),
        }
    }

    pub fn swt(parent: Rc<dyn NativeContainer>, style: StyleFlags) -> Self {
        CreationContext::Swt { parent, style }
    }

    pub fn toolkit(&self) -> Toolkit {
        match self {
            CreationContext::Swing { .. } => Toolkit::Swing,
            CreationContext::Swt { .. } => Toolkit::Swt,
        }
    }

    pub fn parent(&self) -> Option<Rc<dyn NativeContainer>> {
        match self {
            CreationContext::Swing { parent } => parent.clone(),
            CreationContext::Swt { parent, .. } => Some(parent.clone()),
        }
    }

    /// Constructor arguments every peer of this toolkit receives after the component
    pub fn mandatory_args(&self) -> Vec<FactoryArg> {
        match self {
            CreationContext::Swing { .. } => Vec::new(),
            CreationContext::Swt { parent, style } => {
                vec![FactoryArg::container(parent.clone()), FactoryArg::style(*style)]
            }
        }
    }
}

/// Creates peers of one toolkit
#[derive(Debug)]
pub struct ComponentFactory {
    toolkit: Toolkit,
    registry: PeerRegistry,
    lattice: TypeLattice,
    policy: OffsetPolicy,
}

impl ComponentFactory {
    pub fn new(toolkit: Toolkit) -> Self {
        Self::with_policy(toolkit, OffsetPolicy::default())
    }

    /// Factory with the built-in peer types, scrolling with `policy`
    pub fn with_policy(toolkit: Toolkit, policy: OffsetPolicy) -> Self {
        let mut registry = PeerRegistry::new();
        for peer_type in default_peer_types()
            .into_iter()
            .chain(scrolling_peer_types(policy))
        {
            registry.register(peer_type);
        }
        Self {
            toolkit,
            registry,
            lattice: TypeLattice::default(),
            policy,
        }
    }

    pub fn with_config(toolkit: Toolkit, config: &PeerkitConfig) -> Self {
        Self::with_policy(toolkit, config.scrolling.offset_policy)
    }

    pub fn swing() -> Self {
        Self::new(Toolkit::Swing)
    }

    pub fn swt() -> Self {
        Self::new(Toolkit::Swt)
    }

    pub fn toolkit(&self) -> Toolkit {
        self.toolkit
    }

    pub fn policy(&self) -> OffsetPolicy {
        self.policy
    }

    pub fn registry(&self) -> &PeerRegistry {
        &self.registry
    }

    /// Register an additional peer type, replacing one of the same name
    pub fn register(&mut self, peer_type: PeerType) -> Option<PeerType> {
        self.registry.register(peer_type)
    }

    pub fn lattice(&self) -> &TypeLattice {
        &self.lattice
    }

    pub fn lattice_mut(&mut self) -> &mut TypeLattice {
        &mut self.lattice
    }

    /// Create and attach the peer for `component`
    ///
    /// Binding is idempotent: a component that already has a live peer of this
    /// factory's toolkit gets that peer back, and a peer of the other toolkit
    /// is an error. `params` are extra constructor arguments the component may
    /// use when picking its peer type and constructor arguments.
    pub fn bind(
        &self,
        component: &Rc<Component>,
        context: &CreationContext,
        params: &[FactoryArg],
    ) -> Result<Rc<dyn Peer>, PeerError> {
        if let Some(existing) = component.peer() {
            if existing.toolkit() != self.toolkit {
                return Err(PeerError::IllegalRebinding {
                    bound: existing.toolkit(),
                    requested: self.toolkit,
                });
            }
            if !existing.is_disposed() {
                return Ok(existing);
            }
            debug!(component = %component.id(), "previous peer disposed, binding a new one");
        }

        let behavior = component.behavior();
        let type_name = behavior.peer_type(self.toolkit, params)?;
        let fail = |reason| PeerError::instantiation(type_name.clone(), reason);

        let peer_type = self
            .registry
            .get(&type_name)
            .ok_or_else(|| fail(InstantiationFailure::TypeNotFound))?;
        if peer_type.base() != self.toolkit {
            return Err(fail(InstantiationFailure::NotNativeWidget {
                expected: self.toolkit,
                found: peer_type.base(),
            }));
        }
        if !peer_type.implements_peer_contract() {
            return Err(fail(InstantiationFailure::MissingPeerContract));
        }
        if context.toolkit() != self.toolkit {
            return Err(fail(InstantiationFailure::ContextMismatch {
                expected: self.toolkit,
                found: context.toolkit(),
            }));
        }

        let mut args = vec![FactoryArg::component(component, behavior.component_type())];
        args.extend(context.mandatory_args());
        args.extend(behavior.constructor_args(self.toolkit, params));
        let arg_types: Vec<_> = args.iter().map(FactoryArg::ty).collect();

        let constructor = peer_type.resolve(&self.lattice, &arg_types)?;
        let widget = constructor.invoke(&type_name, &args).map_err(|err| match err {
            PeerError::Instantiation { .. } => err,
            other => fail(InstantiationFailure::ConstructorFailed(other.to_string())),
        })?;

        if widget.widget_toolkit() != self.toolkit {
            return Err(fail(InstantiationFailure::NotNativeWidget {
                expected: self.toolkit,
                found: widget.widget_toolkit(),
            }));
        }
        let peer = widget
            .into_peer()
            .ok_or_else(|| fail(InstantiationFailure::MissingPeerContract))?;

        if peer.core().parent().is_none() {
            peer.core().set_parent(context.parent());
        }
        for category in ListenerCategory::ALL {
            peer.core()
                .add_native_listener(create_forwarder(self.toolkit, category, Rc::downgrade(component)));
        }
        trace!(component = %component.id(), listeners = peer.core().native_listener_count(), "forwarders attached");

        component.set_peer(peer.clone());
        debug!(
            component = %component.id(),
            toolkit = %self.toolkit,
            peer_type = %type_name,
            "peer bound"
        );
        Ok(peer)
    }
}
