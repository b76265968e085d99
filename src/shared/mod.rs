//! Shared Utilities Module
//!
//! Configuration used across layers.

pub mod config;

pub use config::{ConfigError, LoggingConfig, PeerkitConfig, ScrollingConfig};
