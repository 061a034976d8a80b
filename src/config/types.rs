// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::graph::LayoutConfig;
use crate::health::HealthConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_base_url() -> String { "http://localhost:8000".to_string() }
const fn default_poll_interval_ms() -> u64 { 2000 }

/// On-disk layout of `healthmap.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HealthmapToml {
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub health: HealthConfig,
    pub layout: LayoutConfig,
    pub service: ServiceConfig,
}

impl From<HealthmapToml> for Config {
    fn from(toml: HealthmapToml) -> Self {
        Self {
            health: toml.health,
            layout: toml.layout,
            service: toml.service,
        }
    }
}
