//! Scripted [`Llm`] implementation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::outbound::llm::{InferenceRequest, Llm};

#[derive(Clone)]
enum Script {
    Complete(String),
    Fail(String),
}

/// Mock LLM that returns a fixed completion or a fixed error and records
/// every request it receives.
#[derive(Clone)]
pub struct MockLlm {
    script: Script,
    requests: Arc<Mutex<Vec<InferenceRequest>>>,
}

impl MockLlm {
    /// Respond to every request with `completion`.
    pub fn new(completion: impl Into<String>) -> Self {
        Self {
            script: Script::Complete(completion.into()),
            requests: Arc::default(),
        }
    }

    /// Fail every request with an inference error carrying `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(reason.into()),
            requests: Arc::default(),
        }
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().expect("lock llm requests").clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().expect("lock llm requests").len()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: &InferenceRequest) -> Result<String> {
        self.requests
            .lock()
            .expect("lock llm requests")
            .push(request.clone());
        match &self.script {
            Script::Complete(text) => Ok(text.clone()),
            Script::Fail(reason) => Err(Error::Inference(reason.clone())),
        }
    }
}
