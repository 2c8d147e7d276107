//! LiveConfig value object - configuration overrides for the current run
//!
//! Steps that change configuration for later steps (the table prefix) write
//! here; the migrator and seed runner receive it explicitly and apply it
//! inside the process that runs the command.

use std::collections::BTreeMap;

/// Config key holding the package table prefix
pub const TABLE_PREFIX_KEY: &str = "voyager.database.table_prefix";

/// In-memory `dotted.key → value` overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveConfig {
    values: BTreeMap<String, String>,
}

impl LiveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
