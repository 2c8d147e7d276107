//! Composer adapter for the dependency-reload port

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::process::{CommandLine, OutputMode};
use crate::domain::ports::DependencyReloader;

/// A project-local `composer.phar` takes precedence over the global binary
pub const COMPOSER_PHAR: &str = "composer.phar";

/// Regenerates the autoloader with `composer dump-autoload`
#[derive(Debug, Clone)]
pub struct ComposerCli {
    php: String,
    composer: String,
    project_root: PathBuf,
    output: OutputMode,
}

impl ComposerCli {
    pub fn new(
        php: impl Into<String>,
        composer: impl Into<String>,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            php: php.into(),
            composer: composer.into(),
            project_root: project_root.into(),
            output: OutputMode::Inherit,
        }
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// The command that would run, resolved against the project root
    pub fn dump_autoload_command(&self) -> CommandLine {
        resolve(&self.php, &self.composer, &self.project_root).arg("dump-autoload")
    }
}

fn resolve(php: &str, composer: &str, project_root: &Path) -> CommandLine {
    if project_root.join(COMPOSER_PHAR).is_file() {
        CommandLine::new(php).arg(COMPOSER_PHAR)
    } else {
        CommandLine::new(composer)
    }
}

impl DependencyReloader for ComposerCli {
    fn reload(&self) -> Result<()> {
        self.dump_autoload_command()
            .run(&self.project_root, self.output)
    }
}
