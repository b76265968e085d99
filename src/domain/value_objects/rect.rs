//! Rect value object - Rectangle representation
//!
//! Rectangles describe visible regions, dirty regions and scroll targets,
//! always in the content coordinate system of a component.

use super::dimensions::{Point, Size};

/// A rectangle defined by its bounds
///
/// `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from bounds
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from position and size
    pub fn from_pos_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Create a rectangle from an origin point and a size
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::from_pos_size(origin.x, origin.y, size.width, size.height)
    }

    /// Create a zero rectangle at origin
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn x(&self) -> i32 {
        self.left
    }

    pub fn y(&self) -> i32 {
        self.top
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Get width
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Get height
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check if `other` lies completely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Check if this rectangle intersects another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Get intersection with another rectangle
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        if left < right && top < bottom {
            Some(Rect::new(left, top, right, bottom))
        } else {
            None
        }
    }

    /// Translate rectangle by offset
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Same size, different origin
    pub fn with_origin(&self, origin: Point) -> Rect {
        Rect::from_origin(origin, self.size())
    }

    /// Check if rectangle is empty (zero or negative area)
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}
