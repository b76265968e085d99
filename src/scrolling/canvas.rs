//! Scrolling an SWT canvas by moving its drawing origin
//!
//! The canvas owns the scroll bars. Their selection is the scroll offset,
//! while the canvas stores the origin it paints from, which is the negated
//! selection.

use std::cell::Cell;
use std::rc::Rc;

use crate::component::Component;
use crate::domain::value_objects::{Point, Rect, Toolkit};
use crate::domain::PeerError;
use crate::factory::StyleFlags;
use crate::toolkit::{NativeContainer, NativeWidget, Peer, PeerCore};

use super::policy::{clamp_axis, OffsetPolicy};
use super::{notify_scrolled, Orientation, ScrollingPeer};

#[derive(Debug)]
pub struct CanvasScrollingPeer {
    core: PeerCore,
    policy: OffsetPolicy,
    style: StyleFlags,
    selection: Cell<Point>,
    origin: Cell<Point>,
}

impl CanvasScrollingPeer {
    pub fn new(
        component: &Rc<Component>,
        parent: Rc<dyn NativeContainer>,
        style: StyleFlags,
        policy: OffsetPolicy,
    ) -> Rc<Self> {
        let peer = Rc::new(Self {
            core: PeerCore::new(Toolkit::Swt, component),
            policy,
            style,
            selection: Cell::new(Point::ORIGIN),
            origin: Cell::new(Point::ORIGIN),
        });
        peer.core.set_parent(Some(parent));
        peer
    }

    pub fn style(&self) -> StyleFlags {
        self.style
    }

    /// Drawing origin of the content, never positive
    pub fn origin(&self) -> Point {
        self.origin.get()
    }

    pub fn selection(&self) -> Point {
        self.selection.get()
    }

    fn move_to(&self, selection: Point) -> bool {
        if self.selection.replace(selection) == selection {
            return false;
        }
        self.origin.set(Point::new(-selection.x, -selection.y));
        true
    }

    /// Selection listener of the canvas scroll bars
    ///
    /// Returns whether the content moved.
    pub fn scroll_bar_selected(&self, orientation: Orientation, value: i32) -> bool {
        let max = self.max_scroll_offset();
        let current = self.selection.get();
        let selection = match orientation {
            Orientation::Horizontal => Point::new(clamp_axis(value, max.x), current.y),
            Orientation::Vertical => Point::new(current.x, clamp_axis(value, max.y)),
        };
        if !self.move_to(selection) {
            return false;
        }
        notify_scrolled(self);
        true
    }

    /// Pull the selection back into range after a resize
    fn revalidate(&self) {
        let max = self.max_scroll_offset();
        let current = self.selection.get();
        if self.move_to(Point::new(clamp_axis(current.x, max.x), clamp_axis(current.y, max.y))) {
            notify_scrolled(self);
        }
    }
}

impl Peer for CanvasScrollingPeer {
    fn core(&self) -> &PeerCore {
        &self.core
    }

    fn set_bounds(&self, bounds: Rect) {
        self.core.set_bounds(bounds);
        self.revalidate();
    }

    fn assign_size(&self) {
        self.revalidate();
    }

    fn as_scrolling(&self) -> Option<&dyn ScrollingPeer> {
        Some(self)
    }
}

impl ScrollingPeer for CanvasScrollingPeer {
    fn set_scroll_offset(&self, x: i32, y: i32) -> Result<(), PeerError> {
        let target = self.policy.apply(x, y, self.max_scroll_offset())?;
        self.move_to(target);
        notify_scrolled(self);
        Ok(())
    }

    fn visible_rectangle(&self) -> Rect {
        let origin = self.origin.get();
        Rect::from_origin(Point::new(-origin.x, -origin.y), self.viewport_size())
    }
}

impl NativeWidget for CanvasScrollingPeer {
    fn widget_toolkit(&self) -> Toolkit {
        Toolkit::Swt
    }

    fn into_peer(self: Rc<Self>) -> Option<Rc<dyn Peer>> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Size;
    use crate::input::native::{SwtEvent, SwtMouseEvent};
    use crate::input::{MouseEventKind, NativeEvent};
    use crate::scrolling::SWT_CANVAS_PEER;
    use crate::testing::{
        bind_scrolling_swt, CountingMouseListener, CountingScrollListener, RecordingBehavior,
        RecordingContainer, RecordingSurface,
    };

    fn canvas() -> (Rc<Component>, Rc<dyn Peer>, Rc<CountingScrollListener>) {
        let container = RecordingContainer::new(Toolkit::Swt);
        let (component, peer) = bind_scrolling_swt(Size::new(600, 400), SWT_CANVAS_PEER, container);
        peer.set_bounds(Rect::from_pos_size(0, 0, 200, 100));
        let listener = CountingScrollListener::new();
        component.add_scroll_listener(listener.clone());
        (component, peer, listener)
    }

    #[test]
    fn test_offset_is_negated_origin() {
        let (component, peer, listener) = canvas();
        let repaints = peer.core().redraw_requests();

        component.set_scroll_offset(120, 35).unwrap();

        assert_eq!(component.scroll_offset().unwrap(), Point::new(120, 35));
        assert_eq!(
            component.visible_rectangle().unwrap(),
            Rect::from_pos_size(120, 35, 200, 100)
        );
        assert_eq!(listener.count(), 1);
        assert_eq!(listener.last_offset(), Some(Point::new(120, 35)));
        assert_eq!(peer.core().redraw_requests(), repaints + 1);
    }

    #[test]
    fn test_setting_the_same_offset_still_notifies() {
        let (component, _peer, listener) = canvas();
        component.set_scroll_offset(10, 10).unwrap();
        component.set_scroll_offset(10, 10).unwrap();
        assert_eq!(listener.count(), 2);
    }

    #[test]
    fn test_scroll_bar_selection() {
        let component = Component::new(RecordingBehavior::new(Some(Size::new(600, 400))).0);
        let container = RecordingContainer::new(Toolkit::Swt);
        let canvas =
            CanvasScrollingPeer::new(&component, container, StyleFlags::NONE, OffsetPolicy::Clamp);
        canvas.set_bounds(Rect::from_pos_size(0, 0, 200, 100));
        let listener = CountingScrollListener::new();
        component.add_scroll_listener(listener.clone());

        assert!(canvas.scroll_bar_selected(Orientation::Vertical, 50));
        assert_eq!(canvas.origin(), Point::new(0, -50));
        assert!(canvas.scroll_bar_selected(Orientation::Horizontal, 9999));
        assert_eq!(canvas.selection(), Point::new(400, 50));
        assert!(!canvas.scroll_bar_selected(Orientation::Horizontal, 400));
        assert_eq!(listener.count(), 2);

        // a bigger canvas needs less scrolling
        canvas.set_bounds(Rect::from_pos_size(0, 0, 500, 380));
        assert_eq!(canvas.selection(), Point::new(100, 20));
        assert_eq!(canvas.origin(), Point::new(-100, -20));
        assert_eq!(listener.count(), 3);
    }

    #[test]
    fn test_reject_policy() {
        let component = Component::new(RecordingBehavior::new(Some(Size::new(600, 400))).0);
        let container = RecordingContainer::new(Toolkit::Swt);
        let canvas =
            CanvasScrollingPeer::new(&component, container, StyleFlags(4), OffsetPolicy::Reject);
        canvas.set_bounds(Rect::from_pos_size(0, 0, 200, 100));

        assert_eq!(canvas.style(), StyleFlags(4));
        assert_eq!(
            canvas.set_scroll_offset(401, 0),
            Err(PeerError::InvalidOffset { x: 401, y: 0 })
        );
        assert_eq!(canvas.set_scroll_offset(400, 300), Ok(()));
        assert_eq!(canvas.origin(), Point::new(-400, -300));
    }

    #[test]
    fn test_scroll_rectangle_to_visible_cases() {
        let (component, _peer, listener) = canvas();

        // below and to the right
        assert!(component.scroll_rectangle_to_visible(Rect::from_pos_size(250, 150, 20, 20)).unwrap());
        assert_eq!(component.scroll_offset().unwrap(), Point::new(70, 70));
        // inside
        assert!(!component.scroll_rectangle_to_visible(Rect::from_pos_size(100, 100, 10, 10)).unwrap());
        // above only
        assert!(component.scroll_rectangle_to_visible(Rect::from_pos_size(100, 10, 10, 10)).unwrap());
        assert_eq!(component.scroll_offset().unwrap(), Point::new(70, 10));
        // past the end of the content
        assert!(component.scroll_rectangle_to_visible(Rect::from_pos_size(700, 500, 10, 10)).unwrap());
        assert_eq!(component.scroll_offset().unwrap(), Point::new(400, 300));
        assert_eq!(listener.count(), 3);
    }

    #[test]
    fn test_mouse_coordinates_include_offset() {
        let (component, peer, _listener) = canvas();
        let mouse = CountingMouseListener::new(true);
        component.add_mouse_listener(mouse.clone());
        component.set_scroll_offset(100, 40).unwrap();

        let mut down = SwtMouseEvent::new(15, 25);
        down.button = 1;
        peer.handle_native_event(&NativeEvent::Swt(SwtEvent::MouseDown(down)));

        assert_eq!(mouse.count(), 1);
        assert_eq!(mouse.last_kind(), Some(MouseEventKind::Pressed));
        assert_eq!(mouse.last_point(), Some(Point::new(115, 65)));
    }

    #[test]
    fn test_paint_translates_by_offset() {
        let (behavior, painted) = RecordingBehavior::new(Some(Size::new(600, 400)));
        let component = Component::new(behavior);
        let container = RecordingContainer::new(Toolkit::Swt);
        let canvas =
            CanvasScrollingPeer::new(&component, container, StyleFlags::NONE, OffsetPolicy::Clamp);
        canvas.set_bounds(Rect::from_pos_size(0, 0, 200, 100));
        component.set_peer(canvas.clone());
        canvas.set_scroll_offset(30, 20).unwrap();

        let mut surface = RecordingSurface::default();
        canvas.paint(&mut surface, Rect::from_pos_size(0, 0, 200, 100));

        assert_eq!(surface.origin, Point::new(-30, -20));
        assert_eq!(
            painted.borrow().last().copied(),
            Some(Rect::from_pos_size(30, 20, 200, 100))
        );
    }
}
