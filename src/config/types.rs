//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Installer configuration (`voyager-install.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerConfig {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub routes: RoutesConfig,
}

/// Executables used to drive the host project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_php")]
    pub php: String,

    #[serde(default = "default_composer")]
    pub composer: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            php: default_php(),
            composer: default_composer(),
        }
    }
}

fn default_php() -> String {
    "php".to_string()
}

fn default_composer() -> String {
    "composer".to_string()
}

/// Where the package lives and what it registers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Package directory, relative to the project root
    #[serde(default = "default_package_path")]
    pub path: PathBuf,

    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_dummy_provider")]
    pub dummy_provider: String,

    #[serde(default = "default_seeder")]
    pub seeder: String,

    #[serde(default = "default_dummy_seeder")]
    pub dummy_seeder: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            path: default_package_path(),
            provider: default_provider(),
            dummy_provider: default_dummy_provider(),
            seeder: default_seeder(),
            dummy_seeder: default_dummy_seeder(),
        }
    }
}

impl PackageConfig {
    /// Directory holding the package's publishable seed templates
    pub fn seed_templates_dir(&self, project_root: &Path, dummy: bool) -> PathBuf {
        let leaf = if dummy { "dummy_seeds" } else { "seeds" };
        project_root
            .join(&self.path)
            .join("publishable")
            .join("database")
            .join(leaf)
    }
}

fn default_package_path() -> PathBuf {
    PathBuf::from("vendor/tcg/voyager")
}

fn default_provider() -> String {
    r"TCG\Voyager\VoyagerServiceProvider".to_string()
}

fn default_dummy_provider() -> String {
    r"TCG\Voyager\Providers\VoyagerDummyServiceProvider".to_string()
}

fn default_seeder() -> String {
    "VoyagerDatabaseSeeder".to_string()
}

fn default_dummy_seeder() -> String {
    "VoyagerDummyDatabaseSeeder".to_string()
}

/// Admin route registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_route_prefix")]
    pub prefix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            prefix: default_route_prefix(),
        }
    }
}

fn default_route_prefix() -> String {
    "admin".to_string()
}
