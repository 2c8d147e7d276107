//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/NDJSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line flags
//! - `error` - Error rendering with fix hints
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Event sinks and step listing
//! - `terminal` / `theme` - Color and icon support
//!
//! ## Usage
//!
//! ```ignore
//! use voyager_install::presentation::factory;
//!
//! let use_case = factory::create_install_use_case(config, &root, OutputMode::Inherit);
//! let report = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod error;
pub mod factory;
pub mod output;
pub mod terminal;
pub mod theme;

pub use factory::create_install_use_case;
