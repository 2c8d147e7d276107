//! Seed runner port

use crate::domain::value_objects::LiveConfig;

/// Runs a database seeder class
pub trait SeedRunner {
    fn seed(&self, config: &LiveConfig, class: &str) -> anyhow::Result<()>;
}
