//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `viewcfg-adapters` crate provides implementations.

use crate::domain::EngineTypeName;
use crate::error::ViewCfgResult;
use std::path::Path;

/// Port for the single disk check the resolver performs.
///
/// Implemented by:
/// - `viewcfg_adapters::filesystem::LocalFilesystem` (production)
/// - `viewcfg_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check that `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for locating view engine types by name.
///
/// Stands in for runtime type loading: an engine is usable only if the
/// registry knows it.
///
/// Implemented by:
/// - `viewcfg_adapters::registry::InMemoryRegistry` (built-in + configured engines)
#[cfg_attr(test, mockall::automock)]
pub trait EngineRegistry: Send + Sync {
    /// Resolve a configured type name to the registered engine.
    ///
    /// Assembly-qualified names (`"Ns.Engine, Ns"`) match on the type part.
    /// Returns `Ok(None)` when no engine is registered under the name.
    fn resolve(&self, type_name: &str) -> ViewCfgResult<Option<EngineTypeName>>;

    /// Register an engine type. Registering a known name is a no-op.
    fn register(&self, engine: EngineTypeName) -> ViewCfgResult<()>;

    /// All registered engines, sorted by name.
    fn list(&self) -> ViewCfgResult<Vec<EngineTypeName>>;
}
