//! SeedFolder value object - the project's seed directory convention
//!
//! - `Seeds`: legacy `database/seeds`, classes live in the global namespace
//! - `Seeders`: `database/seeders`, classes must declare `Database\Seeders`

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;

/// Seed directory convention of the host project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedFolder {
    /// Legacy layout (`database/seeds`)
    #[default]
    Seeds,
    /// Namespaced layout (`database/seeders`)
    Seeders,
}

impl SeedFolder {
    /// Detect the convention from the project's directory layout
    pub fn detect(fs: &dyn FileSystem, project_root: &Path) -> Self {
        if fs.is_dir(&project_root.join("database").join("seeders")) {
            SeedFolder::Seeders
        } else {
            SeedFolder::Seeds
        }
    }

    /// Directory name under `database/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            SeedFolder::Seeds => "seeds",
            SeedFolder::Seeders => "seeders",
        }
    }

    /// Absolute seed directory for a project
    pub fn path_in(&self, project_root: &Path) -> PathBuf {
        project_root.join("database").join(self.dir_name())
    }

    /// Whether seed classes need a namespace declaration
    pub fn requires_namespace(&self) -> bool {
        matches!(self, SeedFolder::Seeders)
    }
}

impl std::fmt::Display for SeedFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
