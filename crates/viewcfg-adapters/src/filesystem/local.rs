//! Local filesystem adapter using std::fs.

use std::path::Path;

use tracing::trace;
use viewcfg_core::application::ports::Filesystem;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        // Follows symlinks; a dangling link or permission error reads as absent.
        let found = std::fs::metadata(path).is_ok_and(|m| m.is_dir());
        trace!(path = %path.display(), found, "checked view directory");
        found
    }
}
