//! Resource publisher port
//!
//! Copies packaged config/migration/seed templates into the host project.

/// Publishes tagged resources of a service provider into the project
pub trait ResourcePublisher {
    /// Publish every resource of `provider` registered under one of `tags`
    fn publish(&self, provider: &str, tags: &[&str]) -> anyhow::Result<()>;
}
