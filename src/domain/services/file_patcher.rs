//! File patcher - applies `PatchTarget`s to files on disk
//!
//! Re-running a patch whose edit is already in place is a no-op: nothing is
//! written and no error is raised.

use tracing::debug;

use crate::domain::entities::PatchTarget;
use crate::domain::ports::{FileError, FileSystem};

/// Result of a single patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file was rewritten
    Applied,
    /// The edit was already present; the file was not touched
    AlreadyApplied,
}

pub struct FilePatcher<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> FilePatcher<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Apply `target`, writing only when the content changes
    pub fn patch(&self, target: &PatchTarget) -> Result<PatchOutcome, FileError> {
        match self.preview(target)? {
            Some(patched) => {
                self.fs.write(target.path(), &patched)?;
                debug!(path = %target.path().display(), "patch applied");
                Ok(PatchOutcome::Applied)
            }
            None => {
                debug!(path = %target.path().display(), "patch already applied");
                Ok(PatchOutcome::AlreadyApplied)
            }
        }
    }

    /// Content the file would have after patching, without writing it
    pub fn preview(&self, target: &PatchTarget) -> Result<Option<String>, FileError> {
        if !self.fs.exists(target.path()) {
            return Err(FileError::NotFound(target.path().to_path_buf()));
        }
        let content = self.fs.read(target.path())?;
        Ok(target.apply(&content))
    }
}
