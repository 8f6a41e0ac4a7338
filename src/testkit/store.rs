//! Recording [`ObjectStore`] implementation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::StoredArtifact;
use crate::error::{Error, Result};
use crate::port::outbound::store::ObjectStore;

/// Thread-safe write collector for storage assertions in tests.
///
/// Failed writes are recorded too, so tests can count attempts.
#[derive(Clone, Default)]
pub struct RecordingStore {
    writes: Arc<Mutex<Vec<StoredArtifact>>>,
    fail_with: Option<String>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every write fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            writes: Arc::default(),
            fail_with: Some(reason.into()),
        }
    }

    /// Write attempts so far, in order.
    pub fn writes(&self) -> Vec<StoredArtifact> {
        self.writes.lock().expect("lock store writes").clone()
    }

    pub fn len(&self) -> usize {
        self.writes.lock().expect("lock store writes").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn put(&self, artifact: &StoredArtifact) -> Result<()> {
        self.writes
            .lock()
            .expect("lock store writes")
            .push(artifact.clone());
        match &self.fail_with {
            Some(reason) => Err(Error::Storage(reason.clone())),
            None => Ok(()),
        }
    }
}
