//! Infrastructure adapters for viewcfg.
//!
//! This crate implements the ports defined in `viewcfg-core::application::ports`
//! and the document loader that turns XML text into a
//! [`ConfigElement`](viewcfg_core::domain::ConfigElement) tree.
//! It contains all external dependencies and I/O operations.

pub mod document;
pub mod filesystem;
pub mod registry;

// Re-export commonly used adapters
pub use document::XmlDocumentLoader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::InMemoryRegistry;
