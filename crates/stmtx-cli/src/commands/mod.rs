//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod detect;
pub mod output;
pub mod parse;

use std::path::{Path, PathBuf};

use tracing::debug;

use stmtx_core::models::config::StmtxConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stmtx")
        .join("config.json")
}

/// Load the configuration named by `-c`, else the default file if present,
/// else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<StmtxConfig> {
    if let Some(path) = config_path {
        return Ok(StmtxConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using configuration from {}", path.display());
        Ok(StmtxConfig::from_file(&path)?)
    } else {
        Ok(StmtxConfig::default())
    }
}
