//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.
//! They are immutable and can be freely shared.

pub mod dimensions;
pub mod modifiers;
pub mod param_type;
pub mod rect;
pub mod toolkit;

pub use dimensions::{Point, Size};
pub use modifiers::ModifierMask;
pub use param_type::{join_types, ParamType, PeerTypeName};
pub use rect::Rect;
pub use toolkit::Toolkit;
