//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod engines;
pub mod init;
pub mod resolve;

use tracing::debug;
use viewcfg_adapters::InMemoryRegistry;
use viewcfg_core::application::EngineCatalog;

use crate::{config::AppConfig, error::CliResult};

/// Built-in engines plus `registry.extra_engines` from the settings.
fn engine_registry(config: &AppConfig) -> CliResult<InMemoryRegistry> {
    let registry = InMemoryRegistry::with_builtin()?;
    let added = EngineCatalog::new(&registry).register_all(&config.registry.extra_engines)?;
    debug!(added, total = registry.len(), "engine registry ready");
    Ok(registry)
}
