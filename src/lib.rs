//! peerkit - toolkit-independent components over Swing-style and SWT-style peers
//!
//! An abstract [`Component`] is written once and bound by a
//! [`ComponentFactory`] to a peer of one native toolkit. The factory picks the
//! peer type and constructor, native events come back through per-toolkit
//! forwarders as abstract input events, and scrolling components share one
//! offset convention on both toolkits.

pub mod component;
pub mod domain;
pub mod factory;
pub mod input;
pub mod log;
pub mod scrolling;
pub mod shared;
pub mod toolkit;

#[cfg(test)]
mod testing;

pub use component::{Component, ComponentBehavior, ComponentId, PaintEvent, Surface};
pub use domain::value_objects::{ModifierMask, ParamType, PeerTypeName, Point, Rect, Size, Toolkit};
pub use domain::{InstantiationFailure, PeerError};
pub use factory::{ComponentFactory, CreationContext, FactoryArg, PeerType, StyleFlags};
pub use scrolling::{OffsetPolicy, ScrollEvent, ScrollListener, ScrollingPeer};
pub use shared::config::PeerkitConfig;
pub use toolkit::{NativeContainer, NativeWidget, Peer};
