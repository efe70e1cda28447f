//! Engine registry adapters.

pub mod builtin;
mod memory;

pub use memory::InMemoryRegistry;
