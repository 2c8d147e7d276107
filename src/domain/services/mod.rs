//! Domain Services
//!
//! Stateless text and file transformations used by the install use case.
//! All file access goes through the `FileSystem` port.

pub mod file_patcher;
pub mod prefix_rewriter;
pub mod seed_namespacer;

pub use file_patcher::{FilePatcher, PatchOutcome};
pub use prefix_rewriter::{apply_prefix, current_prefix};
pub use seed_namespacer::{add_namespace, PendingRewrite, SeedNamespacer, SEEDERS_NAMESPACE};
