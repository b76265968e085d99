//! What happens to scroll offsets outside the scrollable range

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Point;
use crate::domain::PeerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetPolicy {
    /// Move out-of-range offsets to the nearest valid one
    #[default]
    Clamp,
    /// Fail with [`PeerError::InvalidOffset`]
    Reject,
}

impl OffsetPolicy {
    /// Valid offset for a request of `(x, y)` given the largest offset `max`
    ///
    /// Valid offsets lie in `0..=max` on each axis.
    pub fn apply(self, x: i32, y: i32, max: Point) -> Result<Point, PeerError> {
        let clamped = Point::new(clamp_axis(x, max.x), clamp_axis(y, max.y));
        match self {
            OffsetPolicy::Clamp => Ok(clamped),
            OffsetPolicy::Reject if clamped == Point::new(x, y) => Ok(clamped),
            OffsetPolicy::Reject => Err(PeerError::InvalidOffset { x, y }),
        }
    }
}

/// Clamp one axis into `0..=max`; a negative `max` counts as 0
pub fn clamp_axis(value: i32, max: i32) -> i32 {
    value.min(max).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let max = Point::new(100, 50);
        let policy = OffsetPolicy::Clamp;

        assert_eq!(policy.apply(0, 0, max), Ok(Point::ORIGIN));
        assert_eq!(policy.apply(-5, 20, max), Ok(Point::new(0, 20)));
        assert_eq!(policy.apply(150, 80, max), Ok(Point::new(100, 50)));
        assert_eq!(policy.apply(3, 3, Point::new(-10, 0)), Ok(Point::ORIGIN));
    }

    #[test]
    fn test_reject() {
        let max = Point::new(100, 50);
        let policy = OffsetPolicy::Reject;

        assert_eq!(policy.apply(100, 50, max), Ok(Point::new(100, 50)));
        assert_eq!(
            policy.apply(-1, 0, max),
            Err(PeerError::InvalidOffset { x: -1, y: 0 })
        );
        assert_eq!(
            policy.apply(0, 51, max),
            Err(PeerError::InvalidOffset { x: 0, y: 51 })
        );
    }

    #[test]
    fn test_default_is_clamp() {
        assert_eq!(OffsetPolicy::default(), OffsetPolicy::Clamp);
    }
}
