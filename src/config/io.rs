// src/config/io.rs
//! Reading and writing `healthmap.toml`.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::types::{Config, HealthmapToml};
use crate::error::{HealthmapError, Result};

pub const CONFIG_FILE: &str = "healthmap.toml";

/// Parses TOML content into a config.
///
/// # Errors
/// Returns `InvalidConfig` if the content is not valid TOML for the schema.
pub fn parse_toml(content: &str) -> Result<Config> {
    let parsed: HealthmapToml =
        toml::from_str(content).map_err(|e| HealthmapError::InvalidConfig(e.to_string()))?;
    Ok(parsed.into())
}

/// Reads a config file strictly.
///
/// # Errors
/// Returns `Io` if the file cannot be read, or `InvalidConfig` if it cannot be parsed.
pub fn read_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| HealthmapError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content)
}

/// Loads `healthmap.toml` from `dir`, falling back to defaults on any problem.
#[must_use]
pub fn load_local(dir: &Path) -> Config {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Config::default();
    }
    match read_file(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Config::default()
        }
    }
}

/// Writes `config` as TOML to `path`.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let doc = HealthmapToml {
        health: config.health.clone(),
        layout: config.layout.clone(),
        service: config.service.clone(),
    };
    let content =
        toml::to_string_pretty(&doc).map_err(|e| HealthmapError::InvalidConfig(e.to_string()))?;
    fs::write(path, content).map_err(|source| HealthmapError::Io {
        source,
        path: path.to_path_buf(),
    })
}
