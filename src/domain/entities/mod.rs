//! Domain Entities
//!
//! Core types of the install domain:
//! - `PatchTarget` - a declarative, idempotent file edit
//! - `InstallStep` / `StepName` - one step of an install plan

mod install_step;
mod patch_target;

pub use install_step::{InstallStep, StepName};
pub use patch_target::{PatchRule, PatchTarget};
