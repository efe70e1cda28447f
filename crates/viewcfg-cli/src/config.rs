//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! library crates never see it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `VIEWCFG__SECTION__KEY`
//! 3. Settings file (`--config`, or the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ENV_PREFIX: &str = "VIEWCFG";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `viewcfg resolve`.
    pub resolve: ResolveDefaults,
    /// Engines registered on top of the built-in ones.
    pub registry: RegistryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Fully-qualified engine type names.
    pub extra_engines: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the settings file and the
    /// environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("registry.extra_engines")
            .try_parsing(true);

        match config_file {
            Some(path) => Self::load_from(path, true, env),
            None => Self::load_from(&Self::config_path(), false, env),
        }
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "loading settings");

        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default settings")?;

        let config: Self = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).required(required))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read settings from {}", path.display()))?
            .try_deserialize()
            .context("Invalid settings")?;

        Ok(config)
    }

    /// Path to the default settings file.
    ///
    /// Falls back to `.viewcfg.toml` in the current directory when the
    /// platform has no config directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "viewcfg", "viewcfg")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".viewcfg.toml"))
    }
}
