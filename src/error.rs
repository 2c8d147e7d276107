//! Error types for the installer
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

use crate::domain::entities::StepName;
pub use crate::domain::ports::file_system::FileError;

/// Result type alias for installer operations
pub type InstallResult<T> = Result<T, InstallError>;

/// Main error type for installer operations
#[derive(Error, Debug)]
pub enum InstallError {
    /// Reading or writing a project file failed
    #[error(transparent)]
    File(#[from] FileError),

    /// `vendor:publish` (or equivalent) failed
    #[error("publishing resources failed: {0}")]
    Publish(String),

    /// Schema migrator reported a failure
    #[error("migration failed: {0}")]
    Migration(String),

    /// Seed runner reported a failure
    #[error("seeding '{class}' failed: {message}")]
    Seed { class: String, message: String },

    /// Dependency graph could not be reloaded
    #[error("dependency reload failed: {0}")]
    Reload(String),

    /// Hook setup failed
    #[error("hook setup failed: {0}")]
    Hooks(String),

    /// Public storage symlink could not be created
    #[error("storage link failed: {0}")]
    StorageLink(String),

    /// Table prefix is empty or not identifier-safe
    #[error("invalid table prefix '{0}': use letters, digits and underscores, not starting with a digit")]
    InvalidPrefix(String),

    /// `--from-step` names a step that is not in the plan
    #[error("unknown install step '{name}' (expected one of: {expected})")]
    UnknownStep { name: String, expected: String },

    /// Installer configuration could not be loaded
    #[error("invalid installer config {file}: {message}")]
    Config { file: String, message: String },

    /// A step failed; everything after it was not run
    #[error("stopped at step {index} ({step}): {source}")]
    StepFailed {
        index: usize,
        step: StepName,
        #[source]
        source: Box<InstallError>,
    },
}

impl InstallError {
    /// The underlying failure, unwrapping `StepFailed`
    pub fn root(&self) -> &InstallError {
        match self {
            InstallError::StepFailed { source, .. } => source.root(),
            other => other,
        }
    }

    /// Step at which installation stopped, if any
    pub fn failed_step(&self) -> Option<(usize, StepName)> {
        match self {
            InstallError::StepFailed { index, step, .. } => Some((*index, *step)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_seed() {
        let err = InstallError::Seed {
            class: "VoyagerDatabaseSeeder".to_string(),
            message: "exit code 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "seeding 'VoyagerDatabaseSeeder' failed: exit code 1"
        );
    }

    #[test]
    fn test_error_display_step_failed() {
        let err = InstallError::StepFailed {
            index: 3,
            step: StepName::Migrate,
            source: Box::new(InstallError::Migration("SQLSTATE[HY000]".to_string())),
        };
        assert_eq!(
            err.to_string(),
            "stopped at step 3 (migrate): migration failed: SQLSTATE[HY000]"
        );
        assert!(matches!(err.root(), InstallError::Migration(_)));
        assert_eq!(err.failed_step(), Some((3, StepName::Migrate)));
    }

    #[test]
    fn test_error_from_file_error() {
        let err: InstallError = FileError::NotFound(PathBuf::from("routes/web.php")).into();
        assert!(err.to_string().contains("routes/web.php"));
        assert_eq!(err.failed_step(), None);
    }
}
