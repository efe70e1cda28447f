// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for viewcfg.
//!
//! This module contains pure configuration logic. The only disk access, the
//! view-root existence check, is injected as a predicate by the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library, thiserror, serde derives, tracing
//! - **Immutable results**: A built `ViewEngineConfig` has no setters
//!
pub mod declaration;
pub mod document;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use declaration::{EngineDeclaration, EngineEntry, LegacyEngineBlock, MultiEngineBlock};
pub use document::{ConfigElement, Descendants};
pub use entities::{
    AdditionalSources, AssemblySourceInfo, ViewEngineConfig, ViewEngineConfigBuilder,
    ViewEngineRegistration,
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{
    DEFAULT_ENGINE_TYPE, DEFAULT_VIEW_PATH_ROOT, EngineTypeName, MarkupVariant,
};
