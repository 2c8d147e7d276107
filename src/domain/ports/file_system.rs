//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the domain services to read and rewrite project files
//! without depending on concrete implementations (local disk, in-memory mock).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FileError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FileError {
    /// File not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Read or write failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// Map an `io::Error` for `path`, keeping `NotFound` distinguishable
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            _ => FileError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound(_))
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Append content to the end of an existing file
    fn append(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut existing = self.read(path)?;
        existing.push_str(content);
        self.write(path, &existing)
    }

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a directory exists
    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir`, sorted by name
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;
}
