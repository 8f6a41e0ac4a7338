//! Code generation use case.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::prompt::build_prompt;
use crate::domain::DecodingConfig;
use crate::port::outbound::llm::{InferenceRequest, Llm};

/// Turns an instruction and a language into code with a single model call.
pub struct Generator {
    llm: Arc<dyn Llm>,
    decoding: DecodingConfig,
}

impl Generator {
    pub fn new(llm: Arc<dyn Llm>, decoding: DecodingConfig) -> Self {
        Self { llm, decoding }
    }

    /// Generate code for `instruction` in `language`.
    ///
    /// Returns the completion with surrounding whitespace removed. Any
    /// failure is logged and yields an empty string; the cause is not
    /// reported to the caller. No retry is attempted here.
    pub async fn generate(&self, instruction: &str, language: &str) -> String {
        let request = InferenceRequest::new(build_prompt(instruction, language), self.decoding.clone());

        match self.llm.complete(&request).await {
            Ok(completion) => {
                let code = completion.trim();
                debug!(provider = self.llm.name(), bytes = code.len(), "Completion received");
                code.to_string()
            }
            Err(e) => {
                error!(provider = self.llm.name(), error = %e, "Error generating the code");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::ASSISTANT_MARKER;
    use crate::testkit::MockLlm;

    fn generator(llm: &MockLlm) -> Generator {
        Generator::new(Arc::new(llm.clone()), DecodingConfig::default())
    }

    #[tokio::test]
    async fn returns_trimmed_completion() {
        let llm = MockLlm::new("\n  def search(xs, x):\n      pass\n\n");
        let code = generator(&llm).generate("implement binary search", "python").await;
        assert_eq!(code, "def search(xs, x):\n      pass");
    }

    #[tokio::test]
    async fn keeps_code_fences() {
        let llm = MockLlm::new(" ```python\nprint(1)\n``` ");
        let code = generator(&llm).generate("print one", "python").await;
        assert_eq!(code, "```python\nprint(1)\n```");
    }

    #[tokio::test]
    async fn issues_exactly_one_request() {
        let llm = MockLlm::new("code");
        generator(&llm).generate("sort", "go").await;
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn request_carries_prompt_and_fixed_decoding() {
        let llm = MockLlm::new("code");
        let generator = generator(&llm);

        for (instruction, language) in [("sort", "go"), ("", ""), ("parse \"json\"", "C#")] {
            generator.generate(instruction, language).await;
        }

        let requests = llm.requests();
        assert_eq!(requests.len(), 3);
        for (request, (instruction, language)) in
            requests.iter().zip([("sort", "go"), ("", ""), ("parse \"json\"", "C#")])
        {
            assert!(request.prompt.contains(instruction));
            assert!(request.prompt.contains(language));
            assert!(request.prompt.ends_with(ASSISTANT_MARKER));
            assert_eq!(request.decoding, DecodingConfig::default());
        }
    }

    #[tokio::test]
    async fn failure_yields_empty_string() {
        let llm = MockLlm::failing("connection reset");
        let code = generator(&llm).generate("sort", "go").await;
        assert_eq!(code, "");
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn whitespace_only_completion_is_empty() {
        let llm = MockLlm::new("  \n\t ");
        assert!(generator(&llm).generate("sort", "go").await.is_empty());
    }
}
