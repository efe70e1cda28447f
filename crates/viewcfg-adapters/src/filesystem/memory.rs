//! In-memory filesystem adapter for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use viewcfg_core::application::ports::Filesystem;

/// In-memory directory set for testing.
///
/// Clones share the same directory set.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    directories: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem holding `paths` and their ancestors.
    pub fn with_dirs<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let fs = Self::new();
        for path in paths {
            fs.create_dir_all(path.as_ref());
        }
        fs
    }

    /// Record a directory and all of its ancestors.
    pub fn create_dir_all(&self, path: &Path) {
        let Ok(mut dirs) = self.directories.write() else {
            return;
        };

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            dirs.insert(current.clone());
        }
    }

    /// Forget a directory and everything below it.
    pub fn remove_dir_all(&self, path: &Path) {
        if let Ok(mut dirs) = self.directories.write() {
            dirs.retain(|p| !p.starts_with(path));
        }
    }

    /// Number of recorded directories.
    pub fn len(&self) -> usize {
        self.directories.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.directories
            .read()
            .is_ok_and(|dirs| dirs.contains(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_records_ancestors() {
        let fs = MemoryFilesystem::with_dirs(["/srv/app/views"]);
        assert!(fs.is_dir(Path::new("/srv/app/views")));
        assert!(fs.is_dir(Path::new("/srv/app")));
        assert!(fs.is_dir(Path::new("/")));
        assert!(!fs.is_dir(Path::new("/srv/other")));
    }

    #[test]
    fn remove_dir_all_drops_subtree() {
        let fs = MemoryFilesystem::with_dirs(["/srv/app/views/home", "/srv/app/static"]);
        fs.remove_dir_all(Path::new("/srv/app/views"));

        assert!(!fs.is_dir(Path::new("/srv/app/views")));
        assert!(!fs.is_dir(Path::new("/srv/app/views/home")));
        assert!(fs.is_dir(Path::new("/srv/app/static")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/shared"));
        assert!(other.is_dir(Path::new("/shared")));
        assert!(!other.is_empty());
    }
}
