//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain text-editing rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InstallUseCase` - Runs the install plan (publish, migrate, patch, seed, link)

pub mod install;

pub use install::{
    FilePreview, InstallOptions, InstallPlan, InstallReport, InstallTooling, InstallUseCase,
};
