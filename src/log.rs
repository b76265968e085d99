//! Subscriber installation for the library's tracing events
//!
//! peerkit only emits events; applications that want to see them call one of
//! these once at startup. RUST_LOG takes precedence over the given filter.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::shared::config::LoggingConfig;

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install a stderr subscriber
///
/// Returns false when a global subscriber is already set.
pub fn init(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}

/// Install a subscriber writing to `path`, truncating it first
pub fn init_file(filter: &str, path: &Path) -> io::Result<bool> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok())
}

pub fn init_from_config(config: &LoggingConfig) -> io::Result<bool> {
    match &config.file {
        Some(path) => init_file(&config.filter, path),
        None => Ok(init(&config.filter)),
    }
}
