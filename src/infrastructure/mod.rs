//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `tooling/` - Host project tooling (artisan, composer)

pub mod fs;
pub mod tooling;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use tooling::{ArtisanCli, ComposerCli, OutputMode};
