//! voyager-install - installer for the Voyager admin panel
//!
//! Publishes the package resources into a Laravel project, runs its
//! migrations and seeders, and patches the project files the admin panel
//! depends on (user model, routes, seeders, package config). Every file edit
//! is idempotent, so an interrupted install is recovered by running it again.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{InstallOptions, InstallPlan, InstallReport, InstallTooling, InstallUseCase};
pub use config::{InstallerConfig, PROJECT_CONFIG_FILE};
pub use domain::entities::{InstallStep, PatchTarget, StepName};
pub use domain::ports::{InstallEvent, InstallEventSink};
pub use domain::services::{apply_prefix, add_namespace, FilePatcher, SeedNamespacer};
pub use domain::value_objects::{LiveConfig, SeedFolder, TablePrefix};
pub use error::{FileError, InstallError, InstallResult};
