//! Scrolling peers
//!
//! All scrolling peers share one convention: the scroll offset is the
//! position of the viewport's top-left corner in content coordinates. It is
//! never negative, and growing it hides more of the content's left and top.
//! Toolkit models that store the offset differently (such as a negated
//! canvas origin) convert at their boundary.

pub mod bars;
pub mod canvas;
pub mod policy;
pub mod viewport;

use std::rc::Rc;

use tracing::debug;

use crate::domain::value_objects::{ParamType, Point, Rect, Size, Toolkit};
use crate::domain::PeerError;
use crate::factory::{Arguments, PeerType};
use crate::toolkit::{NativeWidget, Peer};

pub use bars::BarScrollingPeer;
pub use canvas::CanvasScrollingPeer;
pub use policy::OffsetPolicy;
pub use viewport::ViewportScrollingPeer;

pub const SWING_SCROLL_BARS_PEER: &str = "peerkit.swing.scroll-bars";
pub const SWING_VIEWPORT_PEER: &str = "peerkit.swing.viewport";
pub const SWT_VIEWPORT_PEER: &str = "peerkit.swt.viewport";
pub const SWT_CANVAS_PEER: &str = "peerkit.swt.canvas";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Sent to scroll listeners after every offset change
///
/// Carries only the scrolled peer; listeners read the new offset from it.
#[derive(Clone, Copy)]
pub struct ScrollEvent<'a> {
    source: &'a dyn ScrollingPeer,
}

impl<'a> ScrollEvent<'a> {
    pub fn new(source: &'a dyn ScrollingPeer) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'a dyn ScrollingPeer {
        self.source
    }

    pub fn offset(&self) -> Point {
        self.source.scroll_offset()
    }

    pub fn visible_rectangle(&self) -> Rect {
        self.source.visible_rectangle()
    }
}

pub trait ScrollListener {
    fn content_scrolled(&self, event: &ScrollEvent<'_>);
}

impl<F> ScrollListener for F
where
    F: Fn(&ScrollEvent<'_>),
{
    fn content_scrolled(&self, event: &ScrollEvent<'_>) {
        self(event)
    }
}

/// A peer that shows a movable window onto larger content
pub trait ScrollingPeer: Peer {
    /// Set both axes in one step
    ///
    /// Triggers exactly one repaint and one scroll notification.
    fn set_scroll_offset(&self, x: i32, y: i32) -> Result<(), PeerError>;

    /// Visible part of the content, in content coordinates
    ///
    /// Its origin is the scroll offset and its size the viewport size.
    fn visible_rectangle(&self) -> Rect;

    /// Largest valid offset on each axis
    fn max_scroll_offset(&self) -> Point {
        max_offset(self.content_size(), self.viewport_size())
    }

    /// Size of the whole content
    fn content_size(&self) -> Size {
        content_size(self)
    }

    fn viewport_size(&self) -> Size {
        self.toolkit_size()
    }

    fn scroll_offset(&self) -> Point {
        self.visible_rectangle().origin()
    }

    fn scroll_offset_x(&self) -> i32 {
        self.scroll_offset().x
    }

    fn scroll_offset_y(&self) -> i32 {
        self.scroll_offset().y
    }

    /// Scroll the minimal distance that makes `rect` visible
    ///
    /// Each axis moves independently and only if `rect` sticks out on that
    /// axis; both moves are applied in a single offset change. A target
    /// larger than the viewport keeps its near edge visible. Returns whether
    /// the offset changed.
    fn scroll_rectangle_to_visible(&self, rect: Rect) -> Result<bool, PeerError> {
        let visible = self.visible_rectangle();
        let max = self.max_scroll_offset();
        let target = Point::new(
            policy::clamp_axis(
                minimal_offset(rect.left, rect.right, visible.left, visible.right),
                max.x,
            ),
            policy::clamp_axis(
                minimal_offset(rect.top, rect.bottom, visible.top, visible.bottom),
                max.y,
            ),
        );
        if target == visible.origin() {
            return Ok(false);
        }
        self.set_scroll_offset(target.x, target.y)?;
        Ok(true)
    }
}

/// New viewport start on one axis so that `[target_min, target_max)` is visible
pub fn minimal_offset(target_min: i32, target_max: i32, visible_min: i32, visible_max: i32) -> i32 {
    let length = visible_max - visible_min;
    if target_min < visible_min {
        target_min
    } else if target_max > visible_max {
        (target_max - length).min(target_min)
    } else {
        visible_min
    }
}

/// The component's defined size, or the viewport when it has none
pub fn content_size<P: Peer + ?Sized>(peer: &P) -> Size {
    peer.component()
        .and_then(|c| c.size())
        .unwrap_or_else(|| peer.toolkit_size())
}

pub fn max_offset(content: Size, viewport: Size) -> Point {
    Point::new(
        (content.width - viewport.width).max(0),
        (content.height - viewport.height).max(0),
    )
}

/// Repaint `peer` and tell its component's scroll listeners
pub(crate) fn notify_scrolled(peer: &dyn ScrollingPeer) {
    debug!(toolkit = %peer.toolkit(), offset = ?peer.scroll_offset(), "scroll offset changed");
    peer.repaint();
    if let Some(component) = peer.component() {
        component.fire_content_scrolled(&ScrollEvent::new(peer));
    }
}

/// Registry entries for the built-in scrolling peers
pub fn scrolling_peer_types(policy: OffsetPolicy) -> Vec<PeerType> {
    let swt_signature = [
        ParamType::SCROLLING_COMPONENT,
        ParamType::NATIVE_CONTAINER,
        ParamType::STYLE,
    ];

    vec![
        PeerType::peer(SWING_SCROLL_BARS_PEER, Toolkit::Swing).constructor(
            &[ParamType::SCROLLING_COMPONENT],
            move |args: &Arguments<'_>| {
                let component = args.component(0)?;
                Ok(BarScrollingPeer::new(&component, policy) as Rc<dyn NativeWidget>)
            },
        ),
        PeerType::peer(SWING_VIEWPORT_PEER, Toolkit::Swing).constructor(
            &[ParamType::SCROLLING_COMPONENT],
            move |args: &Arguments<'_>| {
                let component = args.component(0)?;
                Ok(ViewportScrollingPeer::new(Toolkit::Swing, &component, None, policy)
                    as Rc<dyn NativeWidget>)
            },
        ),
        PeerType::peer(SWT_VIEWPORT_PEER, Toolkit::Swt).constructor(
            &swt_signature,
            move |args: &Arguments<'_>| {
                let component = args.component(0)?;
                let parent = args.container(1)?;
                Ok(
                    ViewportScrollingPeer::new(Toolkit::Swt, &component, Some(parent), policy)
                        as Rc<dyn NativeWidget>,
                )
            },
        ),
        PeerType::peer(SWT_CANVAS_PEER, Toolkit::Swt).constructor(
            &swt_signature,
            move |args: &Arguments<'_>| {
                let component = args.component(0)?;
                let parent = args.container(1)?;
                let style = args.style(2)?;
                Ok(CanvasScrollingPeer::new(&component, parent, style, policy) as Rc<dyn NativeWidget>)
            },
        ),
    ]
}
