//! Amazon Bedrock LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for Anthropic text
//! completion models hosted on Bedrock (`InvokeModel`).

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::port::outbound::llm::{InferenceRequest, Llm};

/// MIME type of request and response bodies.
const CONTENT_TYPE: &str = "application/json";

/// Bedrock runtime client bound to one model.
///
/// Retry budget and read timeout come from the [`SdkConfig`] the client was
/// built with.
#[derive(Debug)]
pub struct Bedrock {
    /// AWS SDK client for the Bedrock runtime.
    client: Client,
    /// Model identifier (e.g., "anthropic.claude-v2").
    model_id: String,
}

impl Bedrock {
    /// Create a Bedrock adapter from an existing SDK client.
    #[must_use]
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Create a Bedrock adapter from a shared SDK configuration.
    #[must_use]
    pub fn from_sdk_config(sdk_config: &SdkConfig, model_id: impl Into<String>) -> Self {
        Self::new(Client::new(sdk_config), model_id)
    }

    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// Anthropic text-completion request body.
#[derive(Serialize)]
struct Request<'a> {
    prompt: &'a str,
    max_tokens_to_sample: u32,
    temperature: f64,
    top_k: u32,
    top_p: f64,
    stop_sequences: &'a [String],
}

impl<'a> From<&'a InferenceRequest> for Request<'a> {
    fn from(request: &'a InferenceRequest) -> Self {
        Self {
            prompt: &request.prompt,
            max_tokens_to_sample: request.decoding.max_tokens,
            temperature: request.decoding.temperature,
            top_k: request.decoding.top_k,
            top_p: request.decoding.top_p,
            stop_sequences: &request.decoding.stop_sequences,
        }
    }
}

#[derive(Deserialize)]
struct Response {
    completion: String,
}

fn parse_completion(body: &[u8]) -> Result<String> {
    let response: Response = serde_json::from_slice(body)?;
    Ok(response.completion)
}

#[async_trait]
impl Llm for Bedrock {
    fn name(&self) -> &'static str {
        "bedrock"
    }

    async fn complete(&self, request: &InferenceRequest) -> Result<String> {
        let payload = serde_json::to_vec(&Request::from(request))?;

        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type(CONTENT_TYPE)
            .accept(CONTENT_TYPE)
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| Error::Inference(DisplayErrorContext(&e).to_string()))?;

        parse_completion(output.body().as_ref())
    }
}
