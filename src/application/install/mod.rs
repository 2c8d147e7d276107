//! Install Module
//!
//! Orchestrates the Voyager installation into a Laravel project.
//!
//! ## Structure
//!
//! - `options` - Run flags (`InstallOptions`)
//! - `plan` - Ordered step list (`InstallPlan`)
//! - `result` - What ran (`InstallReport`)
//! - `targets` - Project files the installer edits
//! - `use_case` - Core use case logic (`InstallUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use voyager_install::application::install::{InstallOptions, InstallUseCase};
//!
//! let use_case = InstallUseCase::new(fs, tooling, config);
//! let report = use_case.execute(&InstallOptions::new(project_root))?;
//! ```

mod options;
mod plan;
mod result;
pub mod targets;
mod use_case;

pub use options::InstallOptions;
pub use plan::InstallPlan;
pub use result::{FilePreview, InstallReport};
pub use use_case::{InstallTooling, InstallUseCase};
