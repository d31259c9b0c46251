//! Configuration structures for the statement pipeline front ends.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StmtxError};

/// Main configuration for stmtx.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StmtxConfig {
    /// Input validation applied before text acquisition.
    pub input: InputConfig,

    /// Result rendering.
    pub output: OutputConfig,
}

/// Limits applied to statement files before they reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,

    /// Accepted file extensions, lower-case, without the dot.
    pub allowed_extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            allowed_extensions: vec!["pdf".to_string(), "txt".to_string()],
        }
    }
}

impl InputConfig {
    /// Check whether a file extension is on the allow-list (case-insensitive).
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}

/// Output rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON results.
    pub pretty: bool,
}

impl StmtxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            StmtxError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StmtxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
