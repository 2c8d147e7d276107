//! Project hook and storage link port

/// Final project wiring, run after all data is seeded.
///
/// The two operations are independent of each other.
pub trait ProjectHooks {
    /// Install the package's hook system
    fn setup_hooks(&self) -> anyhow::Result<()>;

    /// Create the `public/storage` symlink
    fn link_public_storage(&self) -> anyhow::Result<()>;
}
