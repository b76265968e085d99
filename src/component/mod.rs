//! Toolkit-independent components
//!
//! A [`Component`] describes what to paint and which listeners to notify. It
//! knows nothing about the native toolkit until a factory binds a peer to it,
//! and all toolkit traffic goes through that peer afterwards.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::domain::value_objects::{ParamType, PeerTypeName, Point, Rect, Size, Toolkit};
use crate::domain::PeerError;
use crate::factory::FactoryArg;
use crate::input::{
    InputEvent, KeyEventKind, KeyListener, ListenerSet, MouseEventKind, MouseListener,
    MouseWheelListener,
};
use crate::scrolling::{ScrollEvent, ScrollListener, ScrollingPeer};
use crate::toolkit::{default_peer_type, Peer};

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a component, used as the source of abstract events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Drawing surface handed to components by their peer
pub trait Surface {
    /// Move the surface origin by `(dx, dy)`
    fn translate(&mut self, dx: i32, dy: i32);
}

/// A paint request for a component
///
/// `rectangle` is the dirty region in content coordinates; the surface is
/// already translated so that content coordinates can be used directly.
pub struct PaintEvent<'a> {
    pub surface: &'a mut dyn Surface,
    pub rectangle: Rect,
}

/// What a concrete component contributes: painting, size and peer selection
pub trait ComponentBehavior {
    fn paint(&self, _event: &mut PaintEvent<'_>) {}

    /// Fixed content size, or `None` to leave sizing to the native toolkit
    fn size(&self) -> Option<Size> {
        None
    }

    /// Type the component is passed to peer constructors as
    fn component_type(&self) -> ParamType {
        ParamType::COMPONENT
    }

    /// Peer type to create for `toolkit`
    ///
    /// `params` are the extra parameters given to the factory. Scrolling
    /// components have no generic peer and must override this.
    fn peer_type(&self, toolkit: Toolkit, _params: &[FactoryArg]) -> Result<PeerTypeName, PeerError> {
        if self.component_type() == ParamType::SCROLLING_COMPONENT {
            return Err(PeerError::unsupported(format!(
                "scrolling component provides no {toolkit} peer type"
            )));
        }
        Ok(default_peer_type(toolkit))
    }

    /// Extra constructor arguments appended after the toolkit context arguments
    fn constructor_args(&self, _toolkit: Toolkit, _params: &[FactoryArg]) -> Vec<FactoryArg> {
        Vec::new()
    }
}

pub struct Component {
    id: ComponentId,
    behavior: Box<dyn ComponentBehavior>,
    peer: RefCell<Option<Rc<dyn Peer>>>,
    key_listeners: ListenerSet<dyn KeyListener>,
    mouse_listeners: ListenerSet<dyn MouseListener>,
    mouse_wheel_listeners: ListenerSet<dyn MouseWheelListener>,
    scroll_listeners: ListenerSet<dyn ScrollListener>,
    update_ongoing: Cell<bool>,
    repaint_requested: Cell<bool>,
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("id", &self.id)
            .field("toolkit", &self.current_toolkit())
            .finish_non_exhaustive()
    }
}

impl Component {
    pub fn new(behavior: impl ComponentBehavior + 'static) -> Rc<Self> {
        Self::from_boxed(Box::new(behavior))
    }

    pub fn from_boxed(behavior: Box<dyn ComponentBehavior>) -> Rc<Self> {
        Rc::new_cyclic(|owner: &Weak<Component>| Self {
            id: ComponentId::next(),
            behavior,
            peer: RefCell::new(None),
            key_listeners: ListenerSet::new(owner.clone()),
            mouse_listeners: ListenerSet::new(owner.clone()),
            mouse_wheel_listeners: ListenerSet::new(owner.clone()),
            scroll_listeners: ListenerSet::new(owner.clone()),
            update_ongoing: Cell::new(false),
            repaint_requested: Cell::new(false),
        })
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn behavior(&self) -> &dyn ComponentBehavior {
        self.behavior.as_ref()
    }

    /// Toolkit of the bound peer, `None` while unbound
    pub fn current_toolkit(&self) -> Option<Toolkit> {
        self.peer().map(|p| p.toolkit())
    }

    pub fn peer(&self) -> Option<Rc<dyn Peer>> {
        self.peer.borrow().clone()
    }

    pub fn has_peer(&self) -> bool {
        self.peer.borrow().is_some()
    }

    pub(crate) fn set_peer(&self, peer: Rc<dyn Peer>) {
        *self.peer.borrow_mut() = Some(peer);
    }

    pub fn paint(&self, event: &mut PaintEvent<'_>) {
        self.behavior.paint(event);
    }

    pub fn size(&self) -> Option<Size> {
        self.behavior.size()
    }

    pub fn has_defined_size(&self) -> bool {
        self.size().is_some()
    }

    pub fn is_update_ongoing(&self) -> bool {
        self.update_ongoing.get()
    }

    /// Start or finish a batch of changes
    ///
    /// Repaints requested while a batch is ongoing are collapsed into a
    /// single repaint when it finishes.
    pub fn set_update_ongoing(&self, ongoing: bool) {
        if self.update_ongoing.replace(ongoing) == ongoing {
            return;
        }
        if !ongoing && self.repaint_requested.replace(false) {
            self.repaint();
        }
    }

    /// Ask the peer to repaint; does nothing while unbound
    pub fn repaint(&self) {
        let Some(peer) = self.peer() else {
            return;
        };
        if self.update_ongoing.get() {
            self.repaint_requested.set(true);
        } else {
            peer.repaint();
        }
    }

    /// Push the component's defined size to the native layout
    pub fn assign_size(&self) {
        if let Some(peer) = self.peer() {
            peer.assign_size();
        }
    }

    pub fn add_key_listener(&self, listener: Rc<dyn KeyListener>) -> bool {
        self.key_listeners.add(listener)
    }

    pub fn remove_key_listener(&self, listener: &Rc<dyn KeyListener>) -> bool {
        self.key_listeners.remove(listener)
    }

    pub fn add_mouse_listener(&self, listener: Rc<dyn MouseListener>) -> bool {
        self.mouse_listeners.add(listener)
    }

    pub fn remove_mouse_listener(&self, listener: &Rc<dyn MouseListener>) -> bool {
        self.mouse_listeners.remove(listener)
    }

    pub fn add_mouse_wheel_listener(&self, listener: Rc<dyn MouseWheelListener>) -> bool {
        self.mouse_wheel_listeners.add(listener)
    }

    pub fn remove_mouse_wheel_listener(&self, listener: &Rc<dyn MouseWheelListener>) -> bool {
        self.mouse_wheel_listeners.remove(listener)
    }

    pub fn add_scroll_listener(&self, listener: Rc<dyn ScrollListener>) -> bool {
        self.scroll_listeners.add(listener)
    }

    pub fn remove_scroll_listener(&self, listener: &Rc<dyn ScrollListener>) -> bool {
        self.scroll_listeners.remove(listener)
    }

    pub fn key_listeners(&self) -> &ListenerSet<dyn KeyListener> {
        &self.key_listeners
    }

    pub fn mouse_listeners(&self) -> &ListenerSet<dyn MouseListener> {
        &self.mouse_listeners
    }

    pub fn mouse_wheel_listeners(&self) -> &ListenerSet<dyn MouseWheelListener> {
        &self.mouse_wheel_listeners
    }

    /// Deliver an abstract event to the listeners of its category
    ///
    /// Every listener of the matching set is called; the result is true if
    /// any of them consumed the event. Event kinds without a handler are
    /// not delivered.
    pub fn dispatch_event(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(e) => match e.kind {
                KeyEventKind::Pressed => self.key_listeners.fan_out(|l| l.key_pressed(e)),
                KeyEventKind::Released => self.key_listeners.fan_out(|l| l.key_released(e)),
                KeyEventKind::Typed => false,
            },
            InputEvent::MouseWheel(e) => self
                .mouse_wheel_listeners
                .fan_out(|l| l.mouse_wheel_moved(e)),
            InputEvent::Mouse(e) => match e.kind {
                MouseEventKind::Pressed => self.mouse_listeners.fan_out(|l| l.mouse_pressed(e)),
                MouseEventKind::Released => self.mouse_listeners.fan_out(|l| l.mouse_released(e)),
                MouseEventKind::Entered => self.mouse_listeners.fan_out(|l| l.mouse_entered(e)),
                MouseEventKind::Exited => self.mouse_listeners.fan_out(|l| l.mouse_exited(e)),
                MouseEventKind::Moved => self.mouse_listeners.fan_out(|l| l.mouse_moved(e)),
                MouseEventKind::Dragged => self.mouse_listeners.fan_out(|l| l.mouse_dragged(e)),
                MouseEventKind::Clicked | MouseEventKind::Wheel => false,
            },
        }
    }

    /// Notify scroll listeners that the peer's offset changed
    pub fn fire_content_scrolled(&self, event: &ScrollEvent<'_>) {
        trace!(component = %self.id, offset = ?event.offset(), "content scrolled");
        self.scroll_listeners.fan_out(|l| {
            l.content_scrolled(event);
            false
        });
    }

    fn with_scrolling<T>(&self, op: impl FnOnce(&dyn ScrollingPeer) -> T) -> Result<T, PeerError> {
        let peer = self.peer().ok_or(PeerError::NotBound)?;
        let scrolling = peer.as_scrolling().ok_or_else(|| {
            PeerError::unsupported(format!("{} peer of component {} does not scroll", peer.toolkit(), self.id))
        })?;
        Ok(op(scrolling))
    }

    pub fn set_scroll_offset(&self, x: i32, y: i32) -> Result<(), PeerError> {
        self.with_scrolling(|s| s.set_scroll_offset(x, y))?
    }

    pub fn set_scroll_offset_x(&self, x: i32) -> Result<(), PeerError> {
        self.with_scrolling(|s| s.set_scroll_offset(x, s.scroll_offset_y()))?
    }

    pub fn set_scroll_offset_y(&self, y: i32) -> Result<(), PeerError> {
        self.with_scrolling(|s| s.set_scroll_offset(s.scroll_offset_x(), y))?
    }

    pub fn scroll_offset(&self) -> Result<Point, PeerError> {
        self.with_scrolling(|s| s.scroll_offset())
    }

    pub fn scroll_offset_x(&self) -> Result<i32, PeerError> {
        self.with_scrolling(|s| s.scroll_offset_x())
    }

    pub fn scroll_offset_y(&self) -> Result<i32, PeerError> {
        self.with_scrolling(|s| s.scroll_offset_y())
    }

    /// Visible part of the content, in content coordinates
    pub fn visible_rectangle(&self) -> Result<Rect, PeerError> {
        self.with_scrolling(|s| s.visible_rectangle())
    }

    /// Scroll the minimal distance that makes `rect` visible; true if the offset changed
    pub fn scroll_rectangle_to_visible(&self, rect: Rect) -> Result<bool, PeerError> {
        self.with_scrolling(|s| s.scroll_rectangle_to_visible(rect))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyEvent, MouseEvent, MouseWheelEvent};
    use crate::testing::{
        bind_swing, CountingKeyListener, CountingMouseListener, PlainBehavior, SizedBehavior,
    };

    #[test]
    fn test_ids_are_unique() {
        let a = Component::new(PlainBehavior);
        let b = Component::new(PlainBehavior);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_unbound_component() {
        let component = Component::new(SizedBehavior(Size::new(10, 20)));

        assert_eq!(component.current_toolkit(), None);
        assert!(!component.has_peer());
        assert!(component.has_defined_size());
        assert_eq!(component.size(), Some(Size::new(10, 20)));
        assert!(matches!(component.scroll_offset(), Err(PeerError::NotBound)));
        component.repaint();
        component.assign_size();
    }

    #[test]
    fn test_dispatch_routes_by_category() {
        let component = Component::new(PlainBehavior);
        let keys = CountingKeyListener::new(false);
        let mouse = CountingMouseListener::new(true);
        component.add_key_listener(keys.clone());
        component.add_mouse_listener(mouse.clone());

        let wheel_calls = Rc::new(Cell::new(0));
        let calls = wheel_calls.clone();
        component.add_mouse_wheel_listener(Rc::new(move |_: &MouseWheelEvent| {
            calls.set(calls.get() + 1);
            false
        }));

        assert!(!component.dispatch_event(&KeyEvent::new(KeyEventKind::Pressed, 0x41).into()));
        assert!(component.dispatch_event(&MouseEvent::new(MouseEventKind::Dragged, 1, 2).into()));
        let wheel = MouseWheelEvent::new(MouseEvent::new(MouseEventKind::Wheel, 0, 0), 1);
        assert!(!component.dispatch_event(&wheel.into()));

        assert_eq!(keys.count(), 1);
        assert_eq!(mouse.count(), 1);
        assert_eq!(mouse.last_kind(), Some(MouseEventKind::Dragged));
        assert_eq!(wheel_calls.get(), 1);
    }

    #[test]
    fn test_dispatch_reaches_all_listeners() {
        let component = Component::new(PlainBehavior);
        let listeners = [
            CountingMouseListener::new(true),
            CountingMouseListener::new(false),
            CountingMouseListener::new(true),
        ];
        for l in &listeners {
            component.add_mouse_listener(l.clone());
        }

        assert!(component.dispatch_event(&MouseEvent::new(MouseEventKind::Pressed, 0, 0).into()));
        assert!(listeners.iter().all(|l| l.count() == 1));
    }

    #[test]
    fn test_unhandled_kinds_are_not_dispatched() {
        let component = Component::new(PlainBehavior);
        let keys = CountingKeyListener::new(true);
        let mouse = CountingMouseListener::new(true);
        component.add_key_listener(keys.clone());
        component.add_mouse_listener(mouse.clone());

        assert!(!component.dispatch_event(&KeyEvent::new(KeyEventKind::Typed, 0).into()));
        assert!(!component.dispatch_event(&MouseEvent::new(MouseEventKind::Clicked, 0, 0).into()));
        assert_eq!(keys.count(), 0);
        assert_eq!(mouse.count(), 0);
    }

    #[test]
    fn test_listener_registration_deduplicates() {
        let component = Component::new(PlainBehavior);
        let listener: Rc<dyn KeyListener> = CountingKeyListener::new(false);

        assert!(component.add_key_listener(listener.clone()));
        assert!(!component.add_key_listener(listener.clone()));
        assert_eq!(component.key_listeners().len(), 1);
        assert!(component.key_listeners().owner().is_some());
        assert!(component.remove_key_listener(&listener));
        assert!(!component.remove_key_listener(&listener));
    }

    #[test]
    fn test_repaints_coalesce_during_update() {
        let (component, peer) = bind_swing(SizedBehavior(Size::new(5, 5)));
        let before = peer.core().redraw_requests();

        component.set_update_ongoing(true);
        component.repaint();
        component.repaint();
        component.repaint();
        assert_eq!(peer.core().redraw_requests(), before);

        component.set_update_ongoing(false);
        assert_eq!(peer.core().redraw_requests(), before + 1);

        component.set_update_ongoing(true);
        component.set_update_ongoing(false);
        assert_eq!(peer.core().redraw_requests(), before + 1);

        component.repaint();
        assert_eq!(peer.core().redraw_requests(), before + 2);
    }

    #[test]
    fn test_scroll_ops_need_scrolling_peer() {
        let (component, _peer) = bind_swing(PlainBehavior);

        assert!(matches!(
            component.set_scroll_offset(1, 1),
            Err(PeerError::UnsupportedCapability(_))
        ));
        assert!(matches!(
            component.visible_rectangle(),
            Err(PeerError::UnsupportedCapability(_))
        ));
    }
}
