//! In-memory File System
//!
//! Implements the FileSystem port over a map of path → content. Used by
//! unit and use-case tests; counts writes so idempotence can be asserted.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileError, FileSystem, FsResult};

#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    writes: Cell<usize>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.borrow_mut().insert(path.into());
        self
    }

    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn remove(&self, path: &Path) {
        self.files.borrow_mut().remove(path);
    }

    /// Number of successful `write`/`append` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.content(path)
            .ok_or_else(|| FileError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
            || self.files.borrow().keys().any(|f| f.starts_with(path) && f != path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(FileError::NotFound(dir.to_path_buf()));
        }
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|f| f.parent() == Some(dir))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_round_trip_counts_writes() {
        let fs = MemoryFs::new();
        fs.write(Path::new("/a.txt"), "a").unwrap();
        fs.append(Path::new("/a.txt"), "b").unwrap();

        assert_eq!(fs.read(Path::new("/a.txt")).unwrap(), "ab");
        assert_eq!(fs.write_count(), 2);
    }

    #[test]
    fn memory_fs_dirs_are_implied_by_files() {
        let fs = MemoryFs::new().with_file("/app/database/seeds/A.php", "");
        assert!(fs.is_dir(Path::new("/app/database/seeds")));
        assert!(!fs.is_dir(Path::new("/app/database/seeders")));
        assert_eq!(
            fs.list_files(Path::new("/app/database/seeds")).unwrap(),
            vec![PathBuf::from("/app/database/seeds/A.php")]
        );
    }

    #[test]
    fn memory_fs_list_missing_dir_is_not_found() {
        let fs = MemoryFs::new();
        assert!(fs.list_files(Path::new("/none")).unwrap_err().is_not_found());
    }
}
