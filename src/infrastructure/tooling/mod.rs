//! Host project tooling
//!
//! Adapters that satisfy the collaborator ports by shelling out to the
//! project's own `artisan` and `composer`.

pub mod artisan;
pub mod composer;
pub mod process;

pub use artisan::ArtisanCli;
pub use composer::{ComposerCli, COMPOSER_PHAR};
pub use process::{CommandLine, OutputMode};
