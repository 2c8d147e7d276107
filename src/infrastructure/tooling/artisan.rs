//! Artisan CLI adapter
//!
//! Implements the publisher, migrator, seed runner and hook ports by running
//! `php artisan <command>` in the project root.
//!
//! Live config overrides have to be visible to the migrations and seeders
//! themselves, so a command that carries overrides does not go through the
//! `artisan` script. It runs as `php -r <bootstrap>`: the project's console
//! kernel is booted, `config([...])` applies the overrides, then the command
//! is called on the kernel and its exit code becomes the process exit code.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::process::{CommandLine, OutputMode};
use crate::domain::ports::{ProjectHooks, ResourcePublisher, SchemaMigrator, SeedRunner};
use crate::domain::value_objects::LiveConfig;

/// One artisan command with its `--options`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtisanCall {
    pub command: String,
    /// `(--name, value)`; `None` is a bare flag
    pub options: Vec<(String, Option<String>)>,
}

impl ArtisanCall {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            options: Vec::new(),
        }
    }

    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.options.push((name.into(), None));
        self
    }

    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((name.into(), Some(value.into())));
        self
    }

    /// Command-line form: `migrate --force`, `db:seed --class=X`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.command.clone()];
        args.extend(self.options.iter().map(|(name, value)| match value {
            Some(value) => format!("{name}={value}"),
            None => name.clone(),
        }));
        args
    }

    /// Parameter array for `Kernel::call`. Repeated options become a list.
    pub fn php_parameters(&self) -> String {
        let mut grouped: Vec<(&str, Vec<&Option<String>>)> = Vec::new();
        for (name, value) in &self.options {
            match grouped.iter_mut().find(|entry| entry.0 == name.as_str()) {
                Some(entry) => entry.1.push(value),
                None => grouped.push((name.as_str(), vec![value])),
            }
        }

        let entries: Vec<String> = grouped
            .into_iter()
            .map(|(name, values)| {
                let rendered = match values.as_slice() {
                    [single] => php_value(single),
                    many => format!(
                        "[{}]",
                        many.iter().map(|v| php_value(v)).collect::<Vec<_>>().join(", ")
                    ),
                };
                format!("{} => {rendered}", php_string(name))
            })
            .collect();
        format!("[{}]", entries.join(", "))
    }
}

fn php_value(value: &Option<String>) -> String {
    match value {
        Some(value) => php_string(value),
        None => "true".to_string(),
    }
}

/// Single-quoted PHP string literal
fn php_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// `php -r` program: boot the console kernel, apply `overrides`, run `call`
pub fn bootstrap_script(call: &ArtisanCall, overrides: &LiveConfig) -> String {
    let config = overrides
        .iter()
        .map(|(key, value)| format!("{} => {}", php_string(key), php_string(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "require getcwd().'/vendor/autoload.php'; \
         $app = require_once getcwd().'/bootstrap/app.php'; \
         $kernel = $app->make(Illuminate\\Contracts\\Console\\Kernel::class); \
         $kernel->bootstrap(); \
         config([{config}]); \
         exit($kernel->call({}, {}, new Symfony\\Component\\Console\\Output\\ConsoleOutput()));",
        php_string(&call.command),
        call.php_parameters(),
    )
}

/// Drives the host project's `artisan` console
#[derive(Debug, Clone)]
pub struct ArtisanCli {
    php: String,
    project_root: PathBuf,
    output: OutputMode,
}

impl ArtisanCli {
    pub fn new(php: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            php: php.into(),
            project_root: project_root.into(),
            output: OutputMode::Inherit,
        }
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// `php artisan <args...>`, or the kernel bootstrap when there are
    /// overrides to apply
    pub fn command(&self, call: &ArtisanCall, overrides: Option<&LiveConfig>) -> CommandLine {
        match overrides.filter(|config| !config.is_empty()) {
            Some(config) => CommandLine::new(&self.php)
                .arg("-r")
                .arg(bootstrap_script(call, config)),
            None => CommandLine::new(&self.php).arg("artisan").args(call.args()),
        }
    }

    fn run(&self, line: CommandLine) -> Result<()> {
        line.run(&self.project_root, self.output)
    }
}

/// `vendor:publish --provider=<provider> --tag=<a> --tag=<b>`
pub fn publish_call(provider: &str, tags: &[&str]) -> ArtisanCall {
    let mut call = ArtisanCall::new("vendor:publish").option("--provider", provider);
    for tag in tags {
        call = call.option("--tag", *tag);
    }
    call
}

/// `migrate`, plus `--force` when requested
pub fn migrate_call(force: bool) -> ArtisanCall {
    let call = ArtisanCall::new("migrate");
    if force {
        call.flag("--force")
    } else {
        call
    }
}

/// `db:seed --class=<class>`
pub fn seed_call(class: &str) -> ArtisanCall {
    ArtisanCall::new("db:seed").option("--class", class)
}

impl ResourcePublisher for ArtisanCli {
    fn publish(&self, provider: &str, tags: &[&str]) -> Result<()> {
        self.run(self.command(&publish_call(provider, tags), None))
    }
}

impl SchemaMigrator for ArtisanCli {
    fn migrate(&self, config: &LiveConfig, force: bool) -> Result<()> {
        self.run(self.command(&migrate_call(force), Some(config)))
    }
}

impl SeedRunner for ArtisanCli {
    fn seed(&self, config: &LiveConfig, class: &str) -> Result<()> {
        self.run(self.command(&seed_call(class), Some(config)))
    }
}

impl ProjectHooks for ArtisanCli {
    fn setup_hooks(&self) -> Result<()> {
        self.run(self.command(&ArtisanCall::new("hook:setup"), None))
    }

    fn link_public_storage(&self) -> Result<()> {
        self.run(self.command(&ArtisanCall::new("storage:link"), None))
    }
}
