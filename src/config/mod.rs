// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, HealthmapToml, ServiceConfig};

use std::path::Path;
use std::time::Duration;

use crate::error::{HealthmapError, Result};

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `healthmap.toml` from the working directory, or defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::load_in(Path::new("."))
    }

    /// Loads `healthmap.toml` from `dir`, or defaults.
    #[must_use]
    pub fn load_in(dir: &Path) -> Self {
        io::load_local(dir)
    }

    /// Loads and validates a specific config file.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, unparsable, or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = io::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates TOML content.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if parsing or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config = io::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if self.health.green_cutoff < self.health.yellow_cutoff {
            return Err(HealthmapError::InvalidConfig(format!(
                "health.green_cutoff ({}) is below health.yellow_cutoff ({})",
                self.health.green_cutoff, self.health.yellow_cutoff
            )));
        }
        if self.health.method_crit_threshold < self.health.method_warn_threshold {
            return Err(HealthmapError::InvalidConfig(
                "health.method_crit_threshold is below health.method_warn_threshold".into(),
            ));
        }
        if self.health.loc_crit_threshold < self.health.loc_warn_threshold {
            return Err(HealthmapError::InvalidConfig(
                "health.loc_crit_threshold is below health.loc_warn_threshold".into(),
            ));
        }
        Ok(())
    }

    /// Saves the current configuration to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.service.poll_interval_ms)
    }
}
