//! Library configuration (peerkit.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scrolling::OffsetPolicy;

pub const CONFIG_FILE_NAME: &str = "peerkit.toml";

/// Configuration loaded from peerkit.toml
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PeerkitConfig {
    #[serde(default)]
    pub scrolling: ScrollingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollingConfig {
    /// What scrolling peers do with offsets outside the scrollable range
    #[serde(default)]
    pub offset_policy: OffsetPolicy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives used when RUST_LOG is not set
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Write log lines to this file instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

fn default_filter() -> String {
    "peerkit=info".to_string()
}

impl PeerkitConfig {
    /// Find peerkit.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // user config dir first, then cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("peerkit").join(CONFIG_FILE_NAME)),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates.into_iter().flatten().find(|candidate| candidate.exists())
    }

    /// Load configuration, returning defaults if no file is found
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
