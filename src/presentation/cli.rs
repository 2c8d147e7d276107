//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::entities::StepName;

use super::terminal::ColorWhen;

/// Install the Voyager admin panel into a Laravel project
#[derive(Parser, Debug)]
#[command(name = "voyager-install")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Force the primary migration (needed in production)
    #[arg(long)]
    pub force: bool,

    /// Install dummy data
    #[arg(long)]
    pub with_dummy: bool,

    /// Table prefix for all Voyager tables (empty means none)
    #[arg(long, value_name = "PREFIX")]
    pub with_prefix: Option<String>,

    /// Laravel project root
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Show what would change without running tools or writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Resume the install at this step, skipping the ones before it
    #[arg(long, value_name = "STEP")]
    pub from_step: Option<StepName>,

    /// Print the install steps for the given flags and exit
    #[arg(long)]
    pub list_steps: bool,

    /// Installer config file (default: <project>/voyager-install.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI (NDJSON events)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["voyager-install"]).unwrap();
        assert!(!cli.force);
        assert!(!cli.with_dummy);
        assert_eq!(cli.with_prefix, None);
        assert_eq!(cli.project, PathBuf::from("."));
        assert!(!cli.dry_run);
        assert_eq!(cli.from_step, None);
        assert!(!cli.list_steps);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_install_flags() {
        let cli = Cli::try_parse_from([
            "voyager-install",
            "--force",
            "--with-dummy",
            "--with-prefix=voy_",
            "--project",
            "/srv/app",
        ])
        .unwrap();
        assert!(cli.force);
        assert!(cli.with_dummy);
        assert_eq!(cli.with_prefix.as_deref(), Some("voy_"));
        assert_eq!(cli.project, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_cli_parse_empty_prefix() {
        let cli = Cli::try_parse_from(["voyager-install", "--with-prefix="]).unwrap();
        assert_eq!(cli.with_prefix.as_deref(), Some(""));
    }

    #[test]
    fn test_cli_parse_from_step() {
        let cli = Cli::try_parse_from(["voyager-install", "--from-step", "reload_dependencies"])
            .unwrap();
        assert_eq!(cli.from_step, Some(StepName::ReloadDependencies));
    }

    #[test]
    fn test_cli_parse_unknown_step_fails() {
        let err = Cli::try_parse_from(["voyager-install", "--from-step", "deploy"]).unwrap_err();
        assert!(err.to_string().contains("unknown install step 'deploy'"));
    }

    #[test]
    fn test_cli_parse_verbose_count() {
        let cli = Cli::try_parse_from(["voyager-install", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }
}
