//! Object storage port for generated artifacts.

use async_trait::async_trait;

use crate::domain::StoredArtifact;
use crate::error::Result;

/// Write-only access to a bucketed object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Return the backend name for logging.
    fn name(&self) -> &'static str;

    /// Write the artifact body at its bucket and key.
    ///
    /// Creates or overwrites unconditionally; there is no conditional write.
    async fn put(&self, artifact: &StoredArtifact) -> Result<()>;
}
