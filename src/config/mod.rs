//! Installer configuration
//!
//! Resolution order:
//! 1. Environment variables (VOYAGER_INSTALL_*)
//! 2. `--config <file>`, or `<project>/voyager-install.toml`
//! 3. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_for_project, load_with_warnings, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{InstallerConfig, PackageConfig, RoutesConfig, ToolsConfig};
