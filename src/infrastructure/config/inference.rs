//! Inference endpoint configuration.

use serde::Deserialize;

use crate::domain::DecodingConfig;

/// Bedrock model and transport settings.
///
/// Credentials come from the standard AWS provider chain (the Lambda
/// execution role in production).
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Bedrock model identifier.
    ///
    /// Defaults to "anthropic.claude-v2".
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// AWS region hosting the model.
    ///
    /// Defaults to "us-east-1".
    #[serde(default = "default_region")]
    pub region: String,

    /// Read timeout for the inference call in seconds.
    ///
    /// Generation of long outputs is slow. Defaults to 300.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,

    /// Retries the transport makes after the first request.
    ///
    /// Defaults to 3, so a call is attempted at most 4 times.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Sampling parameters sent with every request.
    #[serde(default)]
    pub decoding: DecodingConfig,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            region: default_region(),
            read_timeout_secs: default_read_timeout_secs(),
            max_retries: default_max_retries(),
            decoding: DecodingConfig::default(),
        }
    }
}

impl InferenceConfig {
    /// Total attempts per call, counting the first request.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

fn default_model_id() -> String {
    "anthropic.claude-v2".into()
}

fn default_region() -> String {
    "us-east-1".into()
}

const fn default_read_timeout_secs() -> u64 {
    300
}

const fn default_max_retries() -> u32 {
    3
}
