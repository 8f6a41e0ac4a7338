#![allow(dead_code)]

use std::sync::Arc;

use bedrock_codegen::application::CodegenService;
use bedrock_codegen::infrastructure::bootstrap::build_service_with;
use bedrock_codegen::infrastructure::config::settings::Config;
use bedrock_codegen::testkit::{FixedClock, MockLlm, RecordingStore};

/// Service wired to mock ports, with handles kept for assertions.
pub struct Harness {
    pub service: CodegenService,
    pub llm: MockLlm,
    pub store: RecordingStore,
}

impl Harness {
    pub fn new(config: &Config, llm: MockLlm, store: RecordingStore) -> Self {
        let service = build_service_with(
            config,
            Arc::new(llm.clone()),
            Arc::new(store.clone()),
            Arc::new(FixedClock::at(10, 11, 12)),
        );
        Self { service, llm, store }
    }

    pub fn with_completion(completion: &str) -> Self {
        Self::new(&Config::default(), MockLlm::new(completion), RecordingStore::new())
    }

    pub fn with_failing_llm() -> Self {
        Self::new(
            &Config::default(),
            MockLlm::failing("service unavailable"),
            RecordingStore::new(),
        )
    }
}

pub fn body(message: &str, key: &str) -> Vec<u8> {
    serde_json::json!({ "message": message, "key": key })
        .to_string()
        .into_bytes()
}
