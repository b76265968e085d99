//! Native widget and container contracts
//!
//! These are the only points where the core touches a native toolkit: peer
//! constructors produce native widgets, and containers receive events that
//! a child did not consume.

use std::rc::Rc;

use crate::domain::value_objects::{Size, Toolkit};
use crate::input::NativeEvent;

use super::peer::Peer;

/// A widget created by a peer constructor
pub trait NativeWidget {
    /// Toolkit whose widget base this widget derives from
    fn widget_toolkit(&self) -> Toolkit;

    /// The widget as a peer, if it implements the peer contract
    fn into_peer(self: Rc<Self>) -> Option<Rc<dyn Peer>> {
        None
    }
}

/// A native parent container
pub trait NativeContainer {
    fn toolkit(&self) -> Toolkit;

    /// Dispatch a native event in this container's coordinate system
    fn dispatch_native(&self, event: NativeEvent);

    /// A child assigned itself a fixed size and wants the layout updated
    fn child_size_assigned(&self, _size: Size) {}
}
