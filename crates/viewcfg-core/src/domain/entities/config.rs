//! The resolved view-engine configuration and its builder.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    entities::{registration::ViewEngineRegistration, sources::AssemblySourceInfo},
    error::DomainError,
    value_objects::DEFAULT_VIEW_PATH_ROOT,
};

/// Validated view-engine configuration handed to the templating subsystem.
///
/// Invariants (enforced by [`ViewEngineConfigBuilder::build`]):
/// - `view_path_root` is an absolute path to an existing directory.
/// - `engines` is never empty and keeps declaration order.
///
/// The value is immutable and may be shared across request threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEngineConfig {
    view_path_root: PathBuf,
    virtual_path_root: String,
    engines: Vec<ViewEngineRegistration>,
    assembly_sources: Vec<AssemblySourceInfo>,
    path_sources: Vec<String>,
}

impl ViewEngineConfig {
    pub fn builder() -> ViewEngineConfigBuilder {
        ViewEngineConfigBuilder::new()
    }

    pub fn view_path_root(&self) -> &Path {
        &self.view_path_root
    }

    pub fn virtual_path_root(&self) -> &str {
        &self.virtual_path_root
    }

    /// Registered engines in selection-precedence order.
    pub fn view_engines(&self) -> &[ViewEngineRegistration] {
        &self.engines
    }

    pub fn assembly_sources(&self) -> &[AssemblySourceInfo] {
        &self.assembly_sources
    }

    pub fn path_sources(&self) -> &[String] {
        &self.path_sources
    }
}

/// Accumulates view-engine settings before path resolution.
///
/// Used both by the document resolver and for code-based configuration:
///
/// ```
/// use viewcfg_core::domain::{ViewEngineConfig, ViewEngineRegistration};
///
/// let dir = std::env::temp_dir();
/// let config = ViewEngineConfig::builder()
///     .view_path_root(&dir)
///     .add_engine(ViewEngineRegistration::default_engine())
///     .build(&dir, |p| p.is_dir())
///     .unwrap();
///
/// assert_eq!(config.view_engines().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEngineConfigBuilder {
    view_path_root: PathBuf,
    virtual_path_root: String,
    engines: Vec<ViewEngineRegistration>,
    assembly_sources: Vec<AssemblySourceInfo>,
    path_sources: Vec<String>,
}

impl Default for ViewEngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewEngineConfigBuilder {
    /// Both roots start out as `"views"`.
    pub fn new() -> Self {
        Self {
            view_path_root: PathBuf::from(DEFAULT_VIEW_PATH_ROOT),
            virtual_path_root: DEFAULT_VIEW_PATH_ROOT.to_owned(),
            engines: Vec::new(),
            assembly_sources: Vec::new(),
            path_sources: Vec::new(),
        }
    }

    /// Set the view root. A relative value is resolved against the base
    /// directory at build time and also becomes the virtual root.
    pub fn view_path_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.view_path_root = root.into();
        self
    }

    pub fn virtual_path_root(mut self, root: impl Into<String>) -> Self {
        self.virtual_path_root = root.into();
        self
    }

    /// Set the view root to `dir` below `base_dir`, leaving the virtual
    /// root untouched.
    pub fn relative_view_directory(mut self, base_dir: impl AsRef<Path>, dir: &str) -> Self {
        self.view_path_root = base_dir.as_ref().join(dir);
        self
    }

    pub fn add_engine(mut self, registration: ViewEngineRegistration) -> Self {
        self.engines.push(registration);
        self
    }

    pub fn add_default_engine(self) -> Self {
        self.add_engine(ViewEngineRegistration::default_engine())
    }

    pub fn add_assembly_source(mut self, source: AssemblySourceInfo) -> Self {
        self.assembly_sources.push(source);
        self
    }

    pub fn add_path_source(mut self, location: impl Into<String>) -> Self {
        self.path_sources.push(location.into());
        self
    }

    pub fn assembly_sources(mut self, sources: impl IntoIterator<Item = AssemblySourceInfo>) -> Self {
        self.assembly_sources.extend(sources);
        self
    }

    pub fn path_sources(mut self, locations: impl IntoIterator<Item = String>) -> Self {
        self.path_sources.extend(locations);
        self
    }

    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// Resolve the view root to an absolute path and validate it exists.
    ///
    /// A relative `base_dir` is anchored at the current directory. `is_dir`
    /// is the only disk access; callers pass the filesystem port. An empty
    /// engine list falls back to the default registration.
    pub fn build(
        mut self,
        base_dir: impl AsRef<Path>,
        is_dir: impl Fn(&Path) -> bool,
    ) -> Result<ViewEngineConfig, DomainError> {
        if self.engines.is_empty() {
            debug!("no view engines declared, registering the default engine");
            self.engines.push(ViewEngineRegistration::default_engine());
        }

        let (joined, virtual_path_root) =
            resolve_roots(base_dir.as_ref(), self.view_path_root, self.virtual_path_root);
        let view_path_root =
            std::path::absolute(&joined).map_err(|e| DomainError::InvalidViewPathRoot {
                path: joined.clone(),
                reason: e.to_string(),
            })?;

        if !is_dir(&view_path_root) {
            return Err(DomainError::ViewFolderNotFound {
                path: view_path_root,
            });
        }

        Ok(ViewEngineConfig {
            view_path_root,
            virtual_path_root,
            engines: self.engines,
            assembly_sources: self.assembly_sources,
            path_sources: self.path_sources,
        })
    }
}

/// A relative root doubles as the virtual root and is joined to `base_dir`.
fn resolve_roots(base_dir: &Path, view_root: PathBuf, virtual_root: String) -> (PathBuf, String) {
    if view_root.is_absolute() {
        (view_root, virtual_root)
    } else {
        let virtual_root = view_root.to_string_lossy().into_owned();
        (base_dir.join(view_root), virtual_root)
    }
}
