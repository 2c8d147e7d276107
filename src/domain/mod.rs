//! Domain Layer
//!
//! Install logic without concrete I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (PatchTarget, InstallStep)
//! - `value_objects/` - Immutable value types (TablePrefix, SeedFolder, LiveConfig)
//! - `services/` - Domain services (FilePatcher, PrefixRewriter, SeedNamespacer)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - files are reached only through the `FileSystem` port
//! 2. **Idempotent edits** - every file edit can be re-run safely
//! 3. **Ports & Adapters** - external tooling sits behind trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
