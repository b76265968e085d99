//! Domain layer - errors and value objects shared by every other module

pub mod errors;
pub mod value_objects;

pub use errors::{InstantiationFailure, PeerError};
