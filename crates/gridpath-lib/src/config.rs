use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::finder::SearchAlgorithm;
use crate::grid::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::heuristic::Heuristic;

/// Settings an [`Engine`](crate::Engine) is built from.
///
/// Every field is optional in JSON; missing fields take the defaults
/// (25x25, A*, Manhattan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub columns: usize,
    pub rows: usize,
    pub algorithm: SearchAlgorithm,
    pub heuristic: Heuristic,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            algorithm: SearchAlgorithm::default(),
            heuristic: Heuristic::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading engine config");
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
