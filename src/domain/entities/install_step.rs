//! InstallStep entity - one named step of an install plan

use std::str::FromStr;

use crate::domain::value_objects::TablePrefix;
use crate::error::InstallError;

/// Stable, kebab-case identifier of a step (used by `--from-step` and JSON)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepName {
    PublishSeeds,
    SetLivePrefix,
    Migrate,
    PatchUserModel,
    RegisterRoutes,
    PublishResources,
    NamespaceSeeds,
    ReloadDependencies,
    Seed,
    MigrateDummy,
    SeedDummy,
    PersistPrefix,
    SetupHooks,
    LinkStorage,
}

impl StepName {
    /// Every step name, in execution order
    pub const ALL: [StepName; 14] = [
        StepName::PublishSeeds,
        StepName::SetLivePrefix,
        StepName::Migrate,
        StepName::PatchUserModel,
        StepName::RegisterRoutes,
        StepName::PublishResources,
        StepName::NamespaceSeeds,
        StepName::ReloadDependencies,
        StepName::Seed,
        StepName::MigrateDummy,
        StepName::SeedDummy,
        StepName::PersistPrefix,
        StepName::SetupHooks,
        StepName::LinkStorage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepName::PublishSeeds => "publish-seeds",
            StepName::SetLivePrefix => "set-live-prefix",
            StepName::Migrate => "migrate",
            StepName::PatchUserModel => "patch-user-model",
            StepName::RegisterRoutes => "register-routes",
            StepName::PublishResources => "publish-resources",
            StepName::NamespaceSeeds => "namespace-seeds",
            StepName::ReloadDependencies => "reload-dependencies",
            StepName::Seed => "seed",
            StepName::MigrateDummy => "migrate-dummy",
            StepName::SeedDummy => "seed-dummy",
            StepName::PersistPrefix => "persist-prefix",
            StepName::SetupHooks => "setup-hooks",
            StepName::LinkStorage => "link-storage",
        }
    }
}

impl std::fmt::Display for StepName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepName {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        StepName::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| InstallError::UnknownStep {
                name: s.to_string(),
                expected: StepName::ALL
                    .iter()
                    .map(StepName::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// A step together with the flags it was planned with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    /// Publish the seed templates of the main provider
    PublishSeeds,
    /// Put the table prefix into the live configuration
    SetLivePrefix(TablePrefix),
    /// Run the primary migrations
    Migrate { force: bool },
    /// Make the project's user model extend the package user model
    PatchUserModel,
    /// Append the admin route group to the routes file
    RegisterRoutes,
    /// Publish config and assets (dummy provider when `dummy`)
    PublishResources { dummy: bool },
    /// Add namespace declarations to published seeders
    NamespaceSeeds { dummy: bool },
    /// Rebuild the autoloader
    ReloadDependencies,
    /// Run the primary seeder
    Seed,
    /// Run the dummy-content migrations (never forced)
    MigrateDummy,
    /// Run the dummy-content seeder
    SeedDummy,
    /// Write the table prefix into the persisted config file
    PersistPrefix(TablePrefix),
    /// Install the hook system
    SetupHooks,
    /// Create the public storage symlink
    LinkStorage,
}

impl InstallStep {
    pub fn name(&self) -> StepName {
        match self {
            InstallStep::PublishSeeds => StepName::PublishSeeds,
            InstallStep::SetLivePrefix(_) => StepName::SetLivePrefix,
            InstallStep::Migrate { .. } => StepName::Migrate,
            InstallStep::PatchUserModel => StepName::PatchUserModel,
            InstallStep::RegisterRoutes => StepName::RegisterRoutes,
            InstallStep::PublishResources { .. } => StepName::PublishResources,
            InstallStep::NamespaceSeeds { .. } => StepName::NamespaceSeeds,
            InstallStep::ReloadDependencies => StepName::ReloadDependencies,
            InstallStep::Seed => StepName::Seed,
            InstallStep::MigrateDummy => StepName::MigrateDummy,
            InstallStep::SeedDummy => StepName::SeedDummy,
            InstallStep::PersistPrefix(_) => StepName::PersistPrefix,
            InstallStep::SetupHooks => StepName::SetupHooks,
            InstallStep::LinkStorage => StepName::LinkStorage,
        }
    }

    /// Operator-facing line announcing the step
    pub fn description(&self) -> String {
        match self {
            InstallStep::PublishSeeds => {
                "Publishing the Voyager assets, database, and config files".to_string()
            }
            InstallStep::SetLivePrefix(prefix) => {
                format!("Setting prefix '{prefix}' for tables")
            }
            InstallStep::Migrate { force: true } => {
                "Migrating the database tables into your application (forced)".to_string()
            }
            InstallStep::Migrate { force: false } => {
                "Migrating the database tables into your application".to_string()
            }
            InstallStep::PatchUserModel => {
                "Attempting to set Voyager User model as parent to App\\User".to_string()
            }
            InstallStep::RegisterRoutes => "Adding Voyager routes to routes/web.php".to_string(),
            InstallStep::PublishResources { dummy: true } => "Publishing dummy content".to_string(),
            InstallStep::PublishResources { dummy: false } => {
                "Publishing config and avatar".to_string()
            }
            InstallStep::NamespaceSeeds { .. } => "Adding namespaces to seeders".to_string(),
            InstallStep::ReloadDependencies => {
                "Dumping the autoloaded files and reloading all new files".to_string()
            }
            InstallStep::Seed => "Seeding data into the database".to_string(),
            InstallStep::MigrateDummy => "Migrating dummy tables".to_string(),
            InstallStep::SeedDummy => "Seeding dummy data".to_string(),
            InstallStep::PersistPrefix(prefix) => {
                format!("Writing table prefix '{prefix}' to config/voyager.php")
            }
            InstallStep::SetupHooks => "Setting up the hooks".to_string(),
            InstallStep::LinkStorage => {
                "Adding the storage symlink to your public folder".to_string()
            }
        }
    }

    /// Steps that only touch the in-memory live config.
    ///
    /// These are replayed when resuming past them.
    pub fn is_context_only(&self) -> bool {
        matches!(self, InstallStep::SetLivePrefix(_))
    }
}
