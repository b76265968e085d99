//! Scrolling by moving a viewport over the content (scroll pane model)
//!
//! Works for both toolkits: the Swing-style scroll pane and the SWT-style
//! scrolled composite both keep a view position in content coordinates.

use std::cell::Cell;
use std::rc::Rc;

use crate::component::Component;
use crate::domain::value_objects::{Point, Rect, Toolkit};
use crate::domain::PeerError;
use crate::toolkit::{NativeContainer, NativeWidget, Peer, PeerCore};

use super::policy::{clamp_axis, OffsetPolicy};
use super::{notify_scrolled, ScrollingPeer};

#[derive(Debug)]
pub struct ViewportScrollingPeer {
    core: PeerCore,
    policy: OffsetPolicy,
    view_position: Cell<Point>,
}

impl ViewportScrollingPeer {
    pub fn new(
        toolkit: Toolkit,
        component: &Rc<Component>,
        parent: Option<Rc<dyn NativeContainer>>,
        policy: OffsetPolicy,
    ) -> Rc<Self> {
        let peer = Rc::new(Self {
            core: PeerCore::new(toolkit, component),
            policy,
            view_position: Cell::new(Point::ORIGIN),
        });
        peer.core.set_parent(parent);
        peer
    }

    pub fn view_position(&self) -> Point {
        self.view_position.get()
    }

    /// The user moved the viewport natively; returns whether it moved
    pub fn move_viewport(&self, position: Point) -> bool {
        let max = self.max_scroll_offset();
        let position = Point::new(clamp_axis(position.x, max.x), clamp_axis(position.y, max.y));
        if self.view_position.replace(position) == position {
            return false;
        }
        notify_scrolled(self);
        true
    }

    /// Keep the view position valid after a size change
    fn revalidate(&self) {
        let current = self.view_position.get();
        self.move_viewport(current);
    }
}

impl Peer for ViewportScrollingPeer {
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

impl ScrollingPeer for ViewportScrollingPeer {
    fn set_scroll_offset(&self, x: i32, y: i32) -> Result<(), PeerError> {
        let target = self.policy.apply(x, y, self.max_scroll_offset())?;
        self.view_position.set(target);
        notify_scrolled(self);
        Ok(())
    }

    fn visible_rectangle(&self) -> Rect {
        Rect::from_origin(self.view_position.get(), self.viewport_size())
    }
}

impl NativeWidget for ViewportScrollingPeer {
    fn widget_toolkit(&self) -> Toolkit {
        self.core.toolkit()
    }

    fn into_peer(self: Rc<Self>) -> Option<Rc<dyn Peer>> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Size;
    use crate::scrolling::{SWING_VIEWPORT_PEER, SWT_VIEWPORT_PEER};
    use crate::testing::{
        bind_scrolling_swing, bind_scrolling_swt, CountingScrollListener, RecordingContainer,
    };

    #[test]
    fn test_round_trip_on_both_toolkits() {
        let container = RecordingContainer::new(Toolkit::Swt);
        let bound = [
            bind_scrolling_swing(Size::new(500, 500), SWING_VIEWPORT_PEER, OffsetPolicy::Clamp),
            bind_scrolling_swt(Size::new(500, 500), SWT_VIEWPORT_PEER, container),
        ];

        for (component, peer) in bound {
            peer.set_bounds(Rect::from_pos_size(0, 0, 100, 100));
            let listener = CountingScrollListener::new();
            component.add_scroll_listener(listener.clone());

            for (x, y) in [(0, 0), (1, 399), (400, 400), (17, 0)] {
                component.set_scroll_offset(x, y).unwrap();
                assert_eq!(component.scroll_offset_x().unwrap(), x);
                assert_eq!(component.scroll_offset_y().unwrap(), y);
                assert_eq!(component.visible_rectangle().unwrap().origin(), Point::new(x, y));
            }
            assert_eq!(listener.count(), 4);
        }
    }

    #[test]
    fn test_single_axis_setters() {
        let (component, peer) =
            bind_scrolling_swing(Size::new(300, 300), SWING_VIEWPORT_PEER, OffsetPolicy::Clamp);
        peer.set_bounds(Rect::from_pos_size(0, 0, 100, 100));
        let listener = CountingScrollListener::new();
        component.add_scroll_listener(listener.clone());

        component.set_scroll_offset(10, 20).unwrap();
        component.set_scroll_offset_x(50).unwrap();
        assert_eq!(component.scroll_offset().unwrap(), Point::new(50, 20));
        component.set_scroll_offset_y(5).unwrap();
        assert_eq!(component.scroll_offset().unwrap(), Point::new(50, 5));
        assert_eq!(listener.count(), 3);
    }

    #[test]
    fn test_out_of_range_offsets() {
        let (clamping, peer) =
            bind_scrolling_swing(Size::new(300, 200), SWING_VIEWPORT_PEER, OffsetPolicy::Clamp);
        peer.set_bounds(Rect::from_pos_size(0, 0, 100, 100));
        clamping.set_scroll_offset(-10, 500).unwrap();
        assert_eq!(clamping.scroll_offset().unwrap(), Point::new(0, 100));

        let (rejecting, peer) =
            bind_scrolling_swing(Size::new(300, 200), SWING_VIEWPORT_PEER, OffsetPolicy::Reject);
        peer.set_bounds(Rect::from_pos_size(0, 0, 100, 100));
        let listener = CountingScrollListener::new();
        rejecting.add_scroll_listener(listener.clone());

        assert_eq!(
            rejecting.set_scroll_offset(-1, 0),
            Err(PeerError::InvalidOffset { x: -1, y: 0 })
        );
        assert_eq!(rejecting.scroll_offset().unwrap(), Point::ORIGIN);
        assert_eq!(listener.count(), 0);
    }

    #[test]
    fn test_scroll_rectangle_to_visible() {
        let (component, peer) =
            bind_scrolling_swing(Size::new(1000, 1000), SWING_VIEWPORT_PEER, OffsetPolicy::Clamp);
        peer.set_bounds(Rect::from_pos_size(0, 0, 100, 100));
        component.set_scroll_offset(200, 200).unwrap();
        let listener = CountingScrollListener::new();
        component.add_scroll_listener(listener.clone());

        // already visible
        assert!(!component.scroll_rectangle_to_visible(Rect::from_pos_size(220, 220, 10, 10)).unwrap());
        // left and up
        assert!(component.scroll_rectangle_to_visible(Rect::from_pos_size(150, 180, 10, 10)).unwrap());
        assert_eq!(component.scroll_offset().unwrap(), Point::new(150, 180));
        // right only
        assert!(component.scroll_rectangle_to_visible(Rect::from_pos_size(260, 200, 20, 10)).unwrap());
        assert_eq!(component.scroll_offset().unwrap(), Point::new(180, 180));
        // diagonal down and right, one notification
        assert!(component.scroll_rectangle_to_visible(Rect::from_pos_size(400, 500, 50, 50)).unwrap());
        assert_eq!(component.scroll_offset().unwrap(), Point::new(350, 450));
        assert_eq!(listener.count(), 3);
    }

    #[test]
    fn test_scroll_rectangle_to_visible_is_idempotent() {
        let (component, peer) =
            bind_scrolling_swing(Size::new(1000, 1000), SWING_VIEWPORT_PEER, OffsetPolicy::Clamp);
        peer.set_bounds(Rect::from_pos_size(0, 0, 100, 100));

        let targets = [
            Rect::from_pos_size(500, 20, 30, 30),
            Rect::from_pos_size(300, 300, 400, 50),
            Rect::from_pos_size(950, 990, 200, 200),
            Rect::from_pos_size(-50, -50, 10, 10),
        ];
        for target in targets {
            component.scroll_rectangle_to_visible(target).unwrap();
            let offset = component.scroll_offset().unwrap();
            assert!(!component.scroll_rectangle_to_visible(target).unwrap());
            assert_eq!(component.scroll_offset().unwrap(), offset);
        }
    }

    #[test]
    fn test_native_viewport_move() {
        let (component, peer) =
            bind_scrolling_swing(Size::new(300, 300), SWING_VIEWPORT_PEER, OffsetPolicy::Clamp);
        peer.set_bounds(Rect::from_pos_size(0, 0, 100, 100));
        let listener = CountingScrollListener::new();
        component.add_scroll_listener(listener.clone());
        let viewport = ViewportScrollingPeer::new(Toolkit::Swing, &component, None, OffsetPolicy::Clamp);
        viewport.set_bounds(Rect::from_pos_size(0, 0, 100, 100));

        assert!(viewport.move_viewport(Point::new(40, 60)));
        assert!(!viewport.move_viewport(Point::new(40, 60)));
        assert_eq!(viewport.view_position(), Point::new(40, 60));
        assert_eq!(listener.count(), 1);

        // shrinking the content clamps the view
        viewport.set_bounds(Rect::from_pos_size(0, 0, 280, 280));
        assert_eq!(viewport.view_position(), Point::new(20, 20));
        assert_eq!(listener.count(), 2);
    }
}
