//! Schema migrator port

use crate::domain::value_objects::LiveConfig;

/// Runs the project's pending database migrations
pub trait SchemaMigrator {
    /// Run migrations with the live configuration overrides in effect.
    ///
    /// `force` bypasses the production-environment guard.
    fn migrate(&self, config: &LiveConfig, force: bool) -> anyhow::Result<()>;
}
