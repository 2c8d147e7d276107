//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileError, FileSystem, FsResult};

/// Local file system implementation
///
/// Writes go to a temp file in the same directory and are renamed into
/// place, so an interrupted run never leaves a half-written project file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Write `content` to `path` via tempfile + rename
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| FileError::from_io(parent, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| FileError::from_io(parent, e))?;
    tmp.write_all(content)
        .and_then(|_| tmp.flush())
        .map_err(|e| FileError::from_io(path, e))?;

    // Keep the original permissions when replacing an existing file.
    if let Ok(meta) = std::fs::metadata(path) {
        let _ = std::fs::set_permissions(tmp.path(), meta.permissions());
    }

    tmp.persist(path)
        .map_err(|e| FileError::from_io(path, e.error))?;
    Ok(())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FileError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| FileError::from_io(dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FileError::from_io(dir, e))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
