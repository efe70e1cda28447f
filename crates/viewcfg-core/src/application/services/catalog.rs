//! Engine Catalog - view engine registry operations.
//!
//! Handles registering and listing engine types. Separated from the resolver
//! so the CLI can seed the registry before resolution.

use tracing::debug;

use crate::{application::ports::EngineRegistry, domain::EngineTypeName, error::ViewCfgResult};

/// Service for engine registry operations.
pub struct EngineCatalog<'a> {
    registry: &'a dyn EngineRegistry,
}

impl<'a> EngineCatalog<'a> {
    pub fn new(registry: &'a dyn EngineRegistry) -> Self {
        Self { registry }
    }

    /// Register every name in `names`, validating each one.
    pub fn register_all<I, S>(&self, names: I) -> ViewCfgResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for name in names {
            let engine = EngineTypeName::try_new(name)?;
            debug!(engine = %engine, "registering view engine");
            self.registry.register(engine)?;
            count += 1;
        }
        Ok(count)
    }

    /// Whether `type_name` resolves to a registered engine.
    pub fn is_known(&self, type_name: &str) -> ViewCfgResult<bool> {
        Ok(self.registry.resolve(type_name)?.is_some())
    }

    /// List all engines.
    pub fn list(&self) -> ViewCfgResult<Vec<EngineTypeName>> {
        self.registry.list()
    }
}
