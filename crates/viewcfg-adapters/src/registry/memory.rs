//! In-memory engine registry with built-in engines.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::trace;
use viewcfg_core::{
    application::{ApplicationError, ports::EngineRegistry},
    domain::EngineTypeName,
    error::ViewCfgResult,
};

use crate::registry::builtin;

/// Thread-safe in-memory engine registry.
///
/// Engines are keyed by type name without assembly qualifier, so
/// `"Ns.Engine"` and `"Ns.Engine, Ns"` address the same entry.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRegistry {
    inner: Arc<RwLock<BTreeMap<String, EngineTypeName>>>,
}

impl InMemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with built-in engines loaded.
    pub fn with_builtin() -> ViewCfgResult<Self> {
        let registry = Self::new();
        registry.load_builtin()?;
        Ok(registry)
    }

    /// Load built-in engines.
    pub fn load_builtin(&self) -> ViewCfgResult<()> {
        for name in builtin::all_engines() {
            self.register(EngineTypeName::try_new(name)?)?;
        }
        Ok(())
    }

    /// Get the number of engines.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EngineRegistry for InMemoryRegistry {
    fn resolve(&self, type_name: &str) -> ViewCfgResult<Option<EngineTypeName>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::RegistryLockError)?;

        let key = match EngineTypeName::try_new(type_name) {
            Ok(name) => name.type_part().to_owned(),
            Err(_) => return Ok(None),
        };

        let found = inner.get(&key).cloned();
        trace!(type_name, found = found.is_some(), "engine lookup");
        Ok(found)
    }

    fn register(&self, engine: EngineTypeName) -> ViewCfgResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RegistryLockError)?;

        let key = engine.type_part().to_owned();
        inner.entry(key).or_insert(engine);
        Ok(())
    }

    fn list(&self) -> ViewCfgResult<Vec<EngineTypeName>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::RegistryLockError)?;

        Ok(inner.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_engines_are_registered() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        assert_eq!(registry.len(), 4);
        assert!(registry.resolve(builtin::BRAIL).unwrap().is_some());
    }

    #[test]
    fn assembly_qualified_names_resolve_to_registered_entry() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        let resolved = registry
            .resolve(&format!("{}, Castle.MonoRail.Views.Brail", builtin::BRAIL))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.as_str(), builtin::BRAIL);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        assert!(
            registry
                .resolve(&builtin::BRAIL.to_lowercase())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn blank_name_resolves_to_none() {
        let registry = InMemoryRegistry::with_builtin().unwrap();
        assert!(registry.resolve("   ").unwrap().is_none());
    }

    #[test]
    fn register_is_idempotent_and_list_is_sorted() {
        let registry = InMemoryRegistry::new();
        registry
            .register(EngineTypeName::try_new("Z.Engine").unwrap())
            .unwrap();
        registry
            .register(EngineTypeName::try_new("A.Engine").unwrap())
            .unwrap();
        registry
            .register(EngineTypeName::try_new("A.Engine, A").unwrap())
            .unwrap();

        let names: Vec<String> = registry
            .list()
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, vec!["A.Engine", "Z.Engine"]);
    }
}
