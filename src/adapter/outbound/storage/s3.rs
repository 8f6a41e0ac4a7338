//! Amazon S3 object store.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::domain::StoredArtifact;
use crate::error::{Error, Result};
use crate::port::outbound::store::ObjectStore;

/// Content type recorded on generated objects.
const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// S3-backed [`ObjectStore`] using unconditional `PutObject`.
#[derive(Debug)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self::new(Client::new(sdk_config))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn name(&self) -> &'static str {
        "s3"
    }

    async fn put(&self, artifact: &StoredArtifact) -> Result<()> {
        self.client
            .put_object()
            .bucket(&artifact.bucket)
            .key(&artifact.key)
            .content_type(CONTENT_TYPE)
            .body(ByteStream::from(artifact.body.clone().into_bytes()))
            .send()
            .await
            .map_err(|e| Error::Storage(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
