//! Filesystem provisioning for user home folders.

use async_trait::async_trait;

use crate::result::AppResult;

/// Creates and removes per-user folders.
///
/// Paths are relative to the provisioner's root and use `/` separators.
#[async_trait]
pub trait Provisioner: Send + Sync + 'static {
    /// Create a directory and all of its missing parents.
    async fn mkdir_all(&self, path: &str) -> AppResult<()>;

    /// Remove a file or directory tree. Removing a missing path succeeds.
    async fn remove(&self, path: &str) -> AppResult<()>;
}
