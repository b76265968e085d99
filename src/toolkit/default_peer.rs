//! Generic peers used when a component does not ask for a specific peer type

use std::rc::Rc;

use crate::component::Component;
use crate::domain::value_objects::{ParamType, PeerTypeName, Size, Toolkit};
use crate::factory::{Arguments, PeerType, StyleFlags};

use super::native::{NativeContainer, NativeWidget};
use super::peer::{Peer, PeerCore};

pub const DEFAULT_SWING_PEER: &str = "peerkit.swing.default";
pub const DEFAULT_SWT_PEER: &str = "peerkit.swt.default";

/// Peer type a component gets unless it names another one
pub fn default_peer_type(toolkit: Toolkit) -> PeerTypeName {
    match toolkit {
        Toolkit::Swing => PeerTypeName::from_static(DEFAULT_SWING_PEER),
        Toolkit::Swt => PeerTypeName::from_static(DEFAULT_SWT_PEER),
    }
}

/// Registry entries for both default peers
pub fn default_peer_types() -> Vec<PeerType> {
    vec![
        PeerType::peer(DEFAULT_SWING_PEER, Toolkit::Swing).constructor(
            &[ParamType::COMPONENT],
            |args: &Arguments<'_>| {
                let component = args.component(0)?;
                Ok(DefaultSwingPeer::new(&component) as Rc<dyn NativeWidget>)
            },
        ),
        PeerType::peer(DEFAULT_SWT_PEER, Toolkit::Swt).constructor(
            &[ParamType::COMPONENT, ParamType::NATIVE_CONTAINER, ParamType::STYLE],
            |args: &Arguments<'_>| {
                let component = args.component(0)?;
                let parent = args.container(1)?;
                let style = args.style(2)?;
                Ok(DefaultSwtPeer::new(&component, parent, style) as Rc<dyn NativeWidget>)
            },
        ),
    ]
}

/// Lightweight Swing-style peer that paints its component
#[derive(Debug)]
pub struct DefaultSwingPeer {
    core: PeerCore,
}

impl DefaultSwingPeer {
    pub fn new(component: &Rc<Component>) -> Rc<Self> {
        Rc::new(Self {
            core: PeerCore::new(Toolkit::Swing, component),
        })
    }
}

impl Peer for DefaultSwingPeer {
    fn core(&self) -> &PeerCore {
        &self.core
    }

    /// The component's defined size wins over anything set natively
    fn preferred_size(&self) -> Option<Size> {
        self.component()
            .and_then(|c| c.size())
            .or_else(|| self.core.preferred_size())
    }
}

impl NativeWidget for DefaultSwingPeer {
    fn widget_toolkit(&self) -> Toolkit {
        Toolkit::Swing
    }

    fn into_peer(self: Rc<Self>) -> Option<Rc<dyn Peer>> {
        Some(self)
    }
}

/// SWT-style composite peer
///
/// Assigns the component's size as soon as it is created, since SWT layouts
/// have no preferred-size query.
#[derive(Debug)]
pub struct DefaultSwtPeer {
    core: PeerCore,
    style: StyleFlags,
}

impl DefaultSwtPeer {
    pub fn new(component: &Rc<Component>, parent: Rc<dyn NativeContainer>, style: StyleFlags) -> Rc<Self> {
        let peer = Rc::new(Self {
            core: PeerCore::new(Toolkit::Swt, component),
            style,
        });
        peer.core.set_parent(Some(parent));
        peer.assign_size();
        peer
    }

    pub fn style(&self) -> StyleFlags {
        self.style
    }
}

impl Peer for DefaultSwtPeer {
    fn core(&self) -> &PeerCore {
        &self.core
    }
}

impl NativeWidget for DefaultSwtPeer {
    fn widget_toolkit(&self) -> Toolkit {
        Toolkit::Swt
    }

    fn into_peer(self: Rc<Self>) -> Option<Rc<dyn Peer>> {
        Some(self)
    }
}
