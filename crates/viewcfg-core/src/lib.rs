//! viewcfg Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for resolving the
//! view-engine section of a MonoRail-style configuration document into a
//! validated [`ViewEngineConfig`](domain::ViewEngineConfig).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           viewcfg-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ViewEngineConfigResolver, Catalog)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Registry, Filesystem)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    viewcfg-adapters (Infrastructure)    │
//! │ (XmlDocumentLoader, LocalFilesystem,..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ConfigElement, EngineDeclaration, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use viewcfg_core::application::ViewEngineConfigResolver;
//!
//! // registry: impl EngineRegistry, filesystem: impl Filesystem
//! let resolver = ViewEngineConfigResolver::new(registry, filesystem);
//! let config = resolver.resolve(&section, "/srv/app").unwrap();
//! println!("{}", config.view_path_root().display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EngineCatalog, ViewEngineConfigResolver,
        ports::{EngineRegistry, Filesystem},
    };
    pub use crate::domain::{
        AssemblySourceInfo, ConfigElement, EngineDeclaration, EngineTypeName, MarkupVariant,
        ViewEngineConfig, ViewEngineConfigBuilder, ViewEngineRegistration,
    };
    pub use crate::error::{ViewCfgError, ViewCfgResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
