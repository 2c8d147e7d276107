//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod live_config;
mod seed_folder;
mod table_prefix;

pub use live_config::{LiveConfig, TABLE_PREFIX_KEY};
pub use seed_folder::SeedFolder;
pub use table_prefix::TablePrefix;
