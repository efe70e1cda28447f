//! Application layer for viewcfg.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ViewEngineConfigResolver, EngineCatalog)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Configuration rules
//! live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{EngineCatalog, ViewEngineConfigResolver};

// Re-export port traits (for adapter implementation)
pub use ports::{EngineRegistry, Filesystem};

pub use error::ApplicationError;
