pub mod config;
pub mod registration;
pub mod sources;

pub use config::*;
pub use registration::*;
pub use sources::*;
