//! Worker configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides.

use std::path::Path;

use pursuit_paths::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Default ceiling on `rows * cols` accepted by `init`.
pub const DEFAULT_MAX_CELLS: usize = 1 << 20;

/// Settings for a path service and the thread that hosts it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Name given to the worker thread.
    #[serde(default = "default_thread_name")]
    pub thread_name: String,

    /// Largest grid (in cells) an `init` may install. Searches run to
    /// completion and block the context, so this bounds worst-case latency.
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,

    /// A* settings.
    #[serde(default)]
    pub search: SearchConfig,
}

fn default_thread_name() -> String {
    "pursuit-path-worker".to_owned()
}

fn default_max_cells() -> usize {
    DEFAULT_MAX_CELLS
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            thread_name: default_thread_name(),
            max_cells: DEFAULT_MAX_CELLS,
            search: SearchConfig::default(),
        }
    }
}

impl WorkerConfig {
    /// Parse a JSON config document.
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_json(&text)?)
    }
}

/// Failure to load a [`WorkerConfig`] from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("invalid config file")]
    Parse(#[from] ProtocolError),
}
