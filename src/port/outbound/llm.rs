//! LLM completion port for the code generator.
//!
//! Defines a provider-neutral interface for one blocking text-completion
//! request.

use async_trait::async_trait;

use crate::domain::DecodingConfig;
use crate::error::Result;

/// A prompt together with the decoding parameters to sample it with.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub prompt: String,
    pub decoding: DecodingConfig,
}

impl InferenceRequest {
    pub fn new(prompt: impl Into<String>, decoding: DecodingConfig) -> Self {
        Self {
            prompt: prompt.into(),
            decoding,
        }
    }
}

/// Client for large language model text completion.
///
/// Implementations wrap a specific hosted model and handle authentication,
/// transport-level retries and response parsing.
///
/// # Errors
///
/// The [`complete`](Self::complete) method returns an error for transport
/// failures, rejected requests, or responses without a completion.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the raw completion text.
    ///
    /// The text is returned as the model produced it; callers trim it.
    async fn complete(&self, request: &InferenceRequest) -> Result<String>;
}
