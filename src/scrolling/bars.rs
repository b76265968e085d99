//! Scrolling through a pair of scroll bars (Swing-style bar model)
//!
//! Each bar holds a bounded range model. The offset is the pair of bar
//! values; the user dragging a bar changes one axis at a time.

use std::cell::Cell;
use std::rc::Rc;

use crate::component::Component;
use crate::domain::value_objects::{Point, Rect, Toolkit};
use crate::domain::PeerError;
use crate::toolkit::{NativeWidget, Peer, PeerCore};

use super::policy::{clamp_axis, OffsetPolicy};
use super::{notify_scrolled, Orientation, ScrollingPeer};

/// Bounded range of a scroll bar; the minimum is always 0
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RangeModel {
    pub value: i32,
    /// Visible amount
    pub extent: i32,
    /// Total amount
    pub maximum: i32,
}

impl RangeModel {
    pub fn max_value(&self) -> i32 {
        (self.maximum - self.extent).max(0)
    }
}

#[derive(Debug)]
pub struct BarScrollingPeer {
    core: PeerCore,
    policy: OffsetPolicy,
    horizontal: Cell<RangeModel>,
    vertical: Cell<RangeModel>,
    /// Set while both bars are updated together
    adjusting: Cell<bool>,
}

impl BarScrollingPeer {
    pub fn new(component: &Rc<Component>, policy: OffsetPolicy) -> Rc<Self> {
        let peer = Rc::new(Self {
            core: PeerCore::new(Toolkit::Swing, component),
            policy,
            horizontal: Cell::new(RangeModel::default()),
            vertical: Cell::new(RangeModel::default()),
            adjusting: Cell::new(false),
        });
        peer.sync_ranges();
        peer
    }

    pub fn horizontal_bar(&self) -> RangeModel {
        self.horizontal.get()
    }

    pub fn vertical_bar(&self) -> RangeModel {
        self.vertical.get()
    }

    fn bar(&self, orientation: Orientation) -> &Cell<RangeModel> {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Update extents and maxima from the current sizes
    ///
    /// Returns whether a bar value had to move into the new range.
    fn sync_ranges(&self) -> bool {
        let content = self.content_size();
        let viewport = self.viewport_size();
        let mut moved = false;
        for (bar, extent, maximum) in [
            (&self.horizontal, viewport.width, content.width),
            (&self.vertical, viewport.height, content.height),
        ] {
            let mut model = bar.get();
            model.extent = extent;
            model.maximum = maximum;
            let value = clamp_axis(model.value, model.max_value());
            moved |= value != model.value;
            model.value = value;
            bar.set(model);
        }
        moved
    }

    /// Change one bar's value as the native bar would, clamped to its range
    fn set_bar_value(&self, orientation: Orientation, value: i32) -> bool {
        let bar = self.bar(orientation);
        let mut model = bar.get();
        let value = clamp_axis(value, model.max_value());
        if value == model.value {
            return false;
        }
        model.value = value;
        bar.set(model);
        self.adjustment_value_changed();
        true
    }

    /// Adjustment listener shared by both bars
    fn adjustment_value_changed(&self) {
        if !self.adjusting.get() {
            notify_scrolled(self);
        }
    }

    /// The user dragged a scroll bar to `value`
    ///
    /// Returns whether the offset moved, counting a move caused by content
    /// that shrank since the last resize.
    pub fn drag_bar(&self, orientation: Orientation, value: i32) -> bool {
        let before = self.scroll_offset();

        self.adjusting.set(true);
        self.sync_ranges();
        self.set_bar_value(orientation, value);
        self.adjusting.set(false);

        let moved = self.scroll_offset() != before;
        if moved {
            notify_scrolled(self);
        }
        moved
    }
}

impl Peer for BarScrollingPeer {
    fn core(&self) -> &PeerCore {
        &self.core
    }

    fn set_bounds(&self, bounds: Rect) {
        self.core.set_bounds(bounds);
        if self.sync_ranges() {
            notify_scrolled(self);
        }
    }

    /// The content size is read on demand; only the bars need refreshing
    fn assign_size(&self) {
        if self.sync_ranges() {
            notify_scrolled(self);
        }
    }

    fn as_scrolling(&self) -> Option<&dyn ScrollingPeer> {
        Some(self)
    }
}

impl ScrollingPeer for BarScrollingPeer {
    fn set_scroll_offset(&self, x: i32, y: i32) -> Result<(), PeerError> {
        let before = self.scroll_offset();
        self.sync_ranges();
        let target = match self.policy.apply(x, y, self.max_scroll_offset()) {
            Ok(target) => target,
            Err(err) => {
                // the sync alone may have pulled the bars back
                if self.scroll_offset() != before {
                    notify_scrolled(self);
                }
                return Err(err);
            }
        };

        self.adjusting.set(true);
        self.set_bar_value(Orientation::Horizontal, target.x);
        self.set_bar_value(Orientation::Vertical, target.y);
        self.adjusting.set(false);

        notify_scrolled(self);
        Ok(())
    }

    fn visible_rectangle(&self) -> Rect {
        Rect::from_origin(
            Point::new(self.horizontal.get().value, self.vertical.get().value),
            self.viewport_size(),
        )
    }
}

impl NativeWidget for BarScrollingPeer {
    fn widget_toolkit(&self) -> Toolkit {
        Toolkit::Swing
    }

    fn into_peer(self: Rc<Self>) -> Option<Rc<dyn Peer>> {
        Some(self)
    }
}
