//! Use Case Factory
//!
//! Creates the install use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{InstallTooling, InstallUseCase};
use crate::config::InstallerConfig;
use crate::infrastructure::{ArtisanCli, ComposerCli, LocalFs, OutputMode};

/// Type alias for the concrete InstallUseCase with all dependencies
pub type ConcreteInstallUseCase = InstallUseCase<LocalFs>;

/// Tooling that drives the project's own `artisan` and `composer`
pub fn create_tooling(
    config: &InstallerConfig,
    project_root: &Path,
    output: OutputMode,
) -> InstallTooling {
    let artisan = ArtisanCli::new(&config.tools.php, project_root).with_output(output);
    let composer = ComposerCli::new(&config.tools.php, &config.tools.composer, project_root)
        .with_output(output);

    InstallTooling {
        publisher: Box::new(artisan.clone()),
        migrator: Box::new(artisan.clone()),
        seeder: Box::new(artisan.clone()),
        reloader: Box::new(composer),
        hooks: Box::new(artisan),
    }
}

/// Create an install use case with all dependencies wired up
pub fn create_install_use_case(
    config: InstallerConfig,
    project_root: &Path,
    output: OutputMode,
) -> ConcreteInstallUseCase {
    let tooling = create_tooling(&config, project_root, output);
    InstallUseCase::new(LocalFs::new(), tooling, config)
}
