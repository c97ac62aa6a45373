// FILE: src/cli/config.rs

use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Output format for `resolve` (`text` or `json`).
    pub format: Option<String>,
    /// Constraint set to activate exclusively after resolving.
    pub activate: Option<String>,
    /// File extensions picked up by `check --recursive`.
    pub extensions: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn extensions(&self) -> Vec<String> {
        self.extensions
            .clone()
            .unwrap_or_else(|| vec!["toml".to_string(), "json".to_string()])
    }
}

pub fn load(config_path: &str) -> Result<ConfigFile> {
    let config_content = fs::read_to_string(config_path).map_err(|e| LayoutError::FileNotFound {
        path: format!("Config file {}: {}", config_path, e),
    })?;

    let config = if config_path.ends_with(".json") {
        serde_json::from_str(&config_content).map_err(|e| {
            LayoutError::invalid_format(format!("Invalid JSON config: {}", e))
        })?
    } else if config_path.ends_with(".toml") {
        toml::from_str(&config_content).map_err(|e| {
            LayoutError::invalid_format(format!("Invalid TOML config: {}", e))
        })?
    } else {
        return Err(LayoutError::invalid_format(
            "Config file must be .json or .toml format",
        ));
    };
    log::info!("Loaded configuration from {}", config_path);
    Ok(config)
}
