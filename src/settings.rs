// src/settings.rs
//
// Generator configuration loaded from Config.toml. Everything has a default
// so the binary runs from a bare checkout; paths point at the hand-authored
// registry JSON files and the template directory the artifacts live in.

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RegistryPaths {
    #[serde(default = "default_tokens_path")]
    pub tokens: String,
    #[serde(default = "default_contracts_path")]
    pub contracts: String,
    #[serde(default = "default_price_feeds_path")]
    pub price_feeds: String,
}

fn default_tokens_path() -> String {
    "data/tokens.json".to_string()
}
fn default_contracts_path() -> String {
    "data/contracts.json".to_string()
}
fn default_price_feeds_path() -> String {
    "data/price_feeds.json".to_string()
}

impl Default for RegistryPaths {
    fn default() -> Self {
        Self {
            tokens: default_tokens_path(),
            contracts: default_contracts_path(),
            price_feeds: default_price_feeds_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    /// Directory holding one template file per bindings target.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub registries: RegistryPaths,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub log: LogSettings,
    /// Networks to emit for; empty means every supported network.
    #[serde(default)]
    pub networks: Vec<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("Config.toml")
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .build()?;
        s.try_deserialize()
    }
}
