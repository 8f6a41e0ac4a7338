//! End-to-end handling of one generation request.

use std::sync::Arc;

use tracing::{info, warn};

use super::archiver::Archiver;
use super::generator::Generator;
use crate::domain::{GenerationRequest, KeyScheme, Outcome};
use crate::port::outbound::clock::Clock;

/// Generates code for a request and archives it when generation succeeds.
pub struct CodegenService {
    generator: Generator,
    archiver: Archiver,
    bucket: String,
    keys: KeyScheme,
    clock: Arc<dyn Clock>,
}

impl CodegenService {
    pub fn new(
        generator: Generator,
        archiver: Archiver,
        bucket: impl Into<String>,
        keys: KeyScheme,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            generator,
            archiver,
            bucket: bucket.into(),
            keys,
            clock,
        }
    }

    /// Run the generate-then-store flow.
    ///
    /// At most one inference call and one storage write are made, in that
    /// order. Nothing is written when generation yields no code.
    pub async fn process(&self, request: &GenerationRequest) -> Outcome {
        info!(
            instruction = %request.instruction,
            language = %request.language,
            "Generation request received"
        );

        let code = self
            .generator
            .generate(&request.instruction, &request.language)
            .await;
        if code.is_empty() {
            warn!("No code was generated");
            return Outcome::GenerationFailed;
        }

        let key = self
            .keys
            .derive(&request.instruction, self.clock.time_of_day());
        if self.archiver.store(&code, &self.bucket, &key).await {
            Outcome::Stored { key }
        } else {
            Outcome::StoreFailed { key }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DecodingConfig, KeyPolicy};
    use crate::testkit::{FixedClock, MockLlm, RecordingStore};

    fn service(llm: &MockLlm, store: &RecordingStore, keys: KeyScheme) -> CodegenService {
        CodegenService::new(
            Generator::new(Arc::new(llm.clone()), DecodingConfig::default()),
            Archiver::new(Arc::new(store.clone())),
            "bedrock-code-generation-project",
            keys,
            Arc::new(FixedClock::at(14, 30, 5)),
        )
    }

    #[tokio::test]
    async fn stores_generated_code_once() {
        let llm = MockLlm::new("  def search(): pass  ");
        let store = RecordingStore::new();
        let outcome = service(&llm, &store, KeyScheme::default())
            .process(&GenerationRequest::new("implement binary search", "python"))
            .await;

        assert_eq!(
            outcome,
            Outcome::Stored {
                key: "code-output/implement binary search.py".into()
            }
        );
        let writes = store.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].bucket, "bedrock-code-generation-project");
        assert_eq!(writes[0].body, "def search(): pass");
    }

    #[tokio::test]
    async fn empty_generation_skips_storage() {
        let llm = MockLlm::failing("throttled");
        let store = RecordingStore::new();
        let outcome = service(&llm, &store, KeyScheme::default())
            .process(&GenerationRequest::new("sort", "go"))
            .await;

        assert_eq!(outcome, Outcome::GenerationFailed);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_distinguished() {
        let llm = MockLlm::new("code");
        let store = RecordingStore::failing("no such bucket");
        let outcome = service(&llm, &store, KeyScheme::default())
            .process(&GenerationRequest::new("sort", "go"))
            .await;

        assert_eq!(
            outcome,
            Outcome::StoreFailed {
                key: "code-output/sort.py".into()
            }
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn key_ignores_language() {
        let llm = MockLlm::new("code");
        let store = RecordingStore::new();
        let service = service(&llm, &store, KeyScheme::default());

        service.process(&GenerationRequest::new("fizzbuzz", "python")).await;
        service.process(&GenerationRequest::new("fizzbuzz", "rust")).await;

        let writes = store.writes();
        assert_eq!(writes[0].key, writes[1].key);
    }

    #[tokio::test]
    async fn timestamped_policy_uses_clock() {
        let llm = MockLlm::new("code");
        let store = RecordingStore::new();
        let keys = KeyScheme {
            policy: KeyPolicy::Timestamped,
            ..KeyScheme::default()
        };
        let outcome = service(&llm, &store, keys)
            .process(&GenerationRequest::new("fizzbuzz", "python"))
            .await;

        assert_eq!(
            outcome,
            Outcome::Stored {
                key: "code-output/fizzbuzz-143005.py".into()
            }
        );
    }
}
