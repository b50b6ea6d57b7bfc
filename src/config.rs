use crate::options::OptionDefaults;
use crate::render::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub defaults: OptionDefaults,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl AppConfig {
    /// Defaults, then `prompt_agent.{toml,json,yaml}` if present, then
    /// environment overrides (e.g. PROMPT_AGENT__DEFAULTS__SCENE_COUNT=8).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name("prompt_agent").required(false))
            .add_source(config::Environment::with_prefix("PROMPT_AGENT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Like [`AppConfig::load`] but reads an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("PROMPT_AGENT").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        let defaults = OptionDefaults::default();
        config::Config::builder()
            .set_default("defaults.mood", defaults.mood)?
            .set_default("defaults.tone", defaults.tone)?
            .set_default("defaults.visual_style", defaults.visual_style.as_str())?
            .set_default("defaults.atmosphere", defaults.atmosphere)?
            .set_default("defaults.scene_count", defaults.scene_count as i64)?
            .set_default("output.format", "json")?
            .set_default("output.pretty", true)
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
