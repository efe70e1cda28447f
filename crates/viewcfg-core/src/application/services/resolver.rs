//! View-engine configuration resolver - the startup use case.
//!
//! 1. Detect the declaration shape (multi-engine, legacy, absent)
//! 2. Project it into a builder, validating every engine type
//! 3. Collect additional template sources from the whole section
//! 4. Resolve the view root against the base directory and check it exists
//!
//! Every configuration error surfaces during step 2, before the filesystem is
//! touched in step 4.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{EngineRegistry, Filesystem},
    domain::{
        AdditionalSources, ConfigElement, DomainError, EngineDeclaration, EngineTypeName,
        LegacyEngineBlock, MultiEngineBlock, ViewEngineConfig, ViewEngineConfigBuilder,
        ViewEngineRegistration,
        declaration::{ENGINE_ENTRY_ELEMENT, MULTI_ENGINE_ELEMENT},
    },
    error::ViewCfgResult,
};

/// Resolves a configuration section into a [`ViewEngineConfig`].
///
/// Runs once at startup. The result is immutable; failures abort startup and
/// are never retried.
pub struct ViewEngineConfigResolver {
    registry: Box<dyn EngineRegistry>,
    filesystem: Box<dyn Filesystem>,
}

impl ViewEngineConfigResolver {
    /// Create a resolver with the given adapters.
    pub fn new(registry: Box<dyn EngineRegistry>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            registry,
            filesystem,
        }
    }

    /// Resolve `section` against `base_dir`, the application's base
    /// directory used for relative view roots.
    ///
    /// # Errors
    ///
    /// - Configuration errors ([`crate::error::ViewCfgError::is_configuration_error`])
    ///   for a missing `type`, a blank or unknown engine type, or a view root
    ///   that cannot be made absolute.
    /// - [`DomainError::ViewFolderNotFound`] when the resolved root is not a
    ///   directory.
    #[instrument(
        skip_all,
        fields(section = %section.name(), base_dir = %base_dir.as_ref().display())
    )]
    pub fn resolve(
        &self,
        section: &ConfigElement,
        base_dir: impl AsRef<Path>,
    ) -> ViewCfgResult<ViewEngineConfig> {
        let declaration = EngineDeclaration::detect(section);
        debug!(shape = declaration.shape(), "detected view engine declaration");

        let builder = self.project(&declaration)?;

        let sources = AdditionalSources::collect(section);
        debug!(
            assemblies = sources.assemblies.len(),
            paths = sources.paths.len(),
            "collected additional sources"
        );

        let config = builder
            .assembly_sources(sources.assemblies)
            .path_sources(sources.paths)
            .build(base_dir, |path| self.filesystem.is_dir(path))?;

        info!(
            view_path_root = %config.view_path_root().display(),
            virtual_path_root = %config.virtual_path_root(),
            engines = config.view_engines().len(),
            "view engine configuration resolved"
        );

        Ok(config)
    }

    /// Turn a detected declaration into a builder. No filesystem access.
    fn project(&self, declaration: &EngineDeclaration) -> ViewCfgResult<ViewEngineConfigBuilder> {
        match declaration {
            EngineDeclaration::Multiple(block) => self.project_multiple(block),
            EngineDeclaration::Legacy(block) => self.project_legacy(block),
            EngineDeclaration::Absent => Ok(ViewEngineConfig::builder().add_default_engine()),
        }
    }

    fn project_multiple(&self, block: &MultiEngineBlock) -> ViewCfgResult<ViewEngineConfigBuilder> {
        let mut builder = ViewEngineConfig::builder().view_path_root(block.view_path_root_or_default());

        for entry in &block.entries {
            let type_name = entry
                .declared_type()
                .ok_or(DomainError::MissingAttribute {
                    element: ENGINE_ENTRY_ELEMENT,
                    attribute: "type",
                    parent: MULTI_ENGINE_ELEMENT,
                })?;

            let engine = self.lookup(type_name)?;
            debug!(engine = %engine, markup = %entry.markup(), "registered view engine");
            builder = builder.add_engine(ViewEngineRegistration::new(engine, entry.markup()));
        }

        if builder.engine_count() == 0 {
            builder = builder.add_default_engine();
        }

        Ok(builder)
    }

    fn project_legacy(&self, block: &LegacyEngineBlock) -> ViewCfgResult<ViewEngineConfigBuilder> {
        let root = block.view_path_root_or_default();

        let engine = match block.custom_engine.as_deref() {
            Some(custom) => self.lookup(custom)?,
            None => EngineTypeName::default_engine(),
        };
        debug!(engine = %engine, markup = %block.markup(), "registered legacy view engine");

        Ok(ViewEngineConfig::builder()
            .view_path_root(root)
            .virtual_path_root(root)
            .add_engine(ViewEngineRegistration::new(engine, block.markup())))
    }

    fn lookup(&self, type_name: &str) -> ViewCfgResult<EngineTypeName> {
        let requested = EngineTypeName::try_new(type_name)?;

        self.registry.resolve(requested.as_str())?.ok_or_else(|| {
            DomainError::UnresolvableEngineType {
                type_name: requested.into(),
            }
            .into()
        })
    }
}
