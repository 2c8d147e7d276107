//! Install Result
//!
//! What an install run did.

use std::path::PathBuf;

use crate::domain::entities::StepName;

/// A file change that a dry run would make
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub path: PathBuf,
    /// Unified diff of the change
    pub diff: String,
}

/// Result of an install run
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Steps that ran (as previews when `dry_run`)
    pub executed: Vec<StepName>,
    /// Steps that did not run: before the resume point, or tool steps in a dry run
    pub skipped: Vec<StepName>,
    /// Non-fatal problems the operator has to fix by hand
    pub warnings: Vec<String>,
    /// File changes a dry run would make
    pub previews: Vec<FilePreview>,
    pub dry_run: bool,
}

impl InstallReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn was_executed(&self, step: StepName) -> bool {
        self.executed.contains(&step)
    }
}
