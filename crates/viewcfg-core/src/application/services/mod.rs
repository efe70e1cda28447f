//! Application services (use case orchestration).

mod catalog;
mod resolver;

pub use catalog::EngineCatalog;
pub use resolver::ViewEngineConfigResolver;
