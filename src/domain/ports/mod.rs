//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod dependency_reloader;
pub mod file_system;
pub mod install_events;
pub mod project_hooks;
pub mod resource_publisher;
pub mod schema_migrator;
pub mod seed_runner;

pub use dependency_reloader::DependencyReloader;
pub use file_system::{FileError, FileSystem, FsResult};
pub use install_events::{InstallEvent, InstallEventSink, NoopEventSink};
pub use project_hooks::ProjectHooks;
pub use resource_publisher::ResourcePublisher;
pub use schema_migrator::SchemaMigrator;
pub use seed_runner::SeedRunner;
