//! Install Options
//!
//! Flags for one install run.

use std::path::PathBuf;

use crate::domain::entities::StepName;
use crate::domain::value_objects::TablePrefix;

/// Options for the install use case
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Root of the Laravel project being installed into
    pub project_root: PathBuf,
    /// Pass `--force` to the primary migration
    pub force: bool,
    /// Also publish, migrate and seed the dummy content
    pub with_dummy: bool,
    /// Table prefix for the live and persisted config
    pub with_prefix: Option<TablePrefix>,
    /// Show what would change without running tools or writing files
    pub dry_run: bool,
    /// Skip the steps before this one
    pub resume_from: Option<StepName>,
}

impl InstallOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            force: false,
            with_dummy: false,
            with_prefix: None,
            dry_run: false,
            resume_from: None,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dummy(mut self, with_dummy: bool) -> Self {
        self.with_dummy = with_dummy;
        self
    }

    pub fn with_prefix(mut self, prefix: Option<TablePrefix>) -> Self {
        self.with_prefix = prefix;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_resume_from(mut self, step: Option<StepName>) -> Self {
        self.resume_from = step;
        self
    }
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
