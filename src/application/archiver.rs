//! Persistence of generated code.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::StoredArtifact;
use crate::port::outbound::store::ObjectStore;

/// Writes generated code to the object store, fire-and-forget.
pub struct Archiver {
    store: Arc<dyn ObjectStore>,
}

impl Archiver {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Write `body` at `key` in `bucket`, overwriting any existing object.
    ///
    /// Returns whether the write succeeded. Failures are logged and not
    /// retried.
    pub async fn store(&self, body: &str, bucket: &str, key: &str) -> bool {
        let artifact = StoredArtifact {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body: body.to_string(),
        };

        match self.store.put(&artifact).await {
            Ok(()) => {
                info!(store = self.store.name(), bucket, key, "Code saved");
                true
            }
            Err(e) => {
                error!(store = self.store.name(), bucket, key, error = %e, "Error when saving the code");
                false
            }
        }
    }
}
