//! The peer contract
//!
//! A peer is the toolkit-specific object that renders and receives input for
//! one component. Shared state and behavior live in [`PeerCore`], which every
//! peer holds and exposes through [`Peer::core`]; the trait's provided
//! methods are written against that delegate.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::component::{Component, PaintEvent, Surface};
use crate::domain::value_objects::{Point, Rect, Size, Toolkit};
use crate::input::{ForwardContext, NativeEvent, NativeListener};
use crate::scrolling::ScrollingPeer;

use super::native::NativeContainer;

/// State shared by all peers
pub struct PeerCore {
    toolkit: Toolkit,
    component: Weak<Component>,
    bounds: Cell<Rect>,
    preferred_size: Cell<Option<Size>>,
    parent: RefCell<Option<Rc<dyn NativeContainer>>>,
    native_listeners: RefCell<Vec<Rc<dyn NativeListener>>>,
    disposed: Cell<bool>,
    redraw_requests: Cell<u32>,
}

impl fmt::Debug for PeerCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeerCore")
            .field("toolkit", &self.toolkit)
            .field("bounds", &self.bounds.get())
            .field("disposed", &self.disposed.get())
            .finish_non_exhaustive()
    }
}

impl PeerCore {
    pub fn new(toolkit: Toolkit, component: &Rc<Component>) -> Self {
        Self {
            toolkit,
            component: Rc::downgrade(component),
            bounds: Cell::new(Rect::zero()),
            preferred_size: Cell::new(None),
            parent: RefCell::new(None),
            native_listeners: RefCell::new(Vec::new()),
            disposed: Cell::new(false),
            redraw_requests: Cell::new(0),
        }
    }

    pub fn toolkit(&self) -> Toolkit {
        self.toolkit
    }

    pub fn component(&self) -> Option<Rc<Component>> {
        self.component.upgrade()
    }

    /// Bounds inside the parent container
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }

    /// Resize, keeping the location
    pub fn set_size(&self, size: Size) {
        let bounds = self.bounds.get();
        self.bounds.set(Rect::from_origin(bounds.origin(), size));
    }

    pub fn preferred_size(&self) -> Option<Size> {
        self.preferred_size.get()
    }

    pub fn set_preferred_size(&self, size: Option<Size>) {
        self.preferred_size.set(size);
    }

    pub fn parent(&self) -> Option<Rc<dyn NativeContainer>> {
        self.parent.borrow().clone()
    }

    pub fn set_parent(&self, parent: Option<Rc<dyn NativeContainer>>) {
        *self.parent.borrow_mut() = parent;
    }

    pub fn add_native_listener(&self, listener: Rc<dyn NativeListener>) {
        self.native_listeners.borrow_mut().push(listener);
    }

    pub fn native_listener_count(&self) -> usize {
        self.native_listeners.borrow().len()
    }

    /// Hand a native event to every attached native listener
    pub fn deliver(&self, event: &NativeEvent, context: &ForwardContext) -> bool {
        let listeners = self.native_listeners.borrow().clone();
        let mut consumed = false;
        for listener in listeners {
            consumed |= listener.on_native_event(event, context);
        }
        consumed
    }

    pub fn request_redraw(&self) {
        self.redraw_requests.set(self.redraw_requests.get() + 1);
    }

    /// Number of redraws requested from the native toolkit so far
    pub fn redraw_requests(&self) -> u32 {
        self.redraw_requests.get()
    }

    pub fn dispose(&self) {
        if !self.disposed.replace(true) {
            trace!(toolkit = %self.toolkit, "peer disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Apply the component's defined size to the native layout
    ///
    /// Swing-style peers publish it as their preferred size; SWT-style peers
    /// report it to the parent, which owns the layout data.
    pub fn assign_size(&self) {
        let Some(size) = self.component().and_then(|c| c.size()) else {
            return;
        };
        self.set_size(size);
        match self.toolkit {
            Toolkit::Swing => self.set_preferred_size(Some(size)),
            Toolkit::Swt => {
                if let Some(parent) = self.parent() {
                    parent.child_size_assigned(size);
                }
            }
        }
    }
}

/// Contract every toolkit-specific peer satisfies
pub trait Peer {
    fn core(&self) -> &PeerCore;

    fn toolkit(&self) -> Toolkit {
        self.core().toolkit()
    }

    fn component(&self) -> Option<Rc<Component>> {
        self.core().component()
    }

    fn repaint(&self) {
        self.core().request_redraw();
    }

    fn location_in_parent(&self) -> Point {
        self.core().bounds().origin()
    }

    /// Current on-screen size of the native widget
    fn toolkit_size(&self) -> Size {
        self.core().bounds().size()
    }

    /// Native layout moved or resized the widget
    fn set_bounds(&self, bounds: Rect) {
        self.core().set_bounds(bounds);
    }

    fn preferred_size(&self) -> Option<Size> {
        self.core().preferred_size()
    }

    fn assign_size(&self) {
        self.core().assign_size();
    }

    fn is_disposed(&self) -> bool {
        self.core().is_disposed()
    }

    fn dispose(&self) {
        self.core().dispose();
    }

    /// This peer's scrolling capability, if it has one
    fn as_scrolling(&self) -> Option<&dyn ScrollingPeer> {
        None
    }

    /// Native paint callback; `dirty` is in widget coordinates
    fn paint(&self, surface: &mut dyn Surface, dirty: Rect) {
        let Some(component) = self.component() else {
            return;
        };
        let offset = self
            .as_scrolling()
            .map(|s| s.scroll_offset())
            .unwrap_or(Point::ORIGIN);
        surface.translate(-offset.x, -offset.y);
        let mut event = PaintEvent {
            surface,
            rectangle: dirty.translate(offset.x, offset.y),
        };
        component.paint(&mut event);
    }

    /// Native event callback; returns whether an abstract listener consumed it
    fn handle_native_event(&self, event: &NativeEvent) -> bool {
        let context = ForwardContext {
            scroll_offset: self.as_scrolling().map(|s| s.scroll_offset()),
            location: self.location_in_parent(),
            parent: self.core().parent(),
        };
        self.core().deliver(event, &context)
    }
}

impl fmt::Debug for dyn Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.core(), f)
    }
}
