//! Dependency reloader port

/// Re-resolves the project's class graph so newly published or patched
/// sources can be referenced by later steps.
pub trait DependencyReloader {
    fn reload(&self) -> anyhow::Result<()>;
}
