//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! The shared AWS configuration (credential chain, default region) is
//! resolved once per cold start. Service clients and the [`CodegenService`]
//! are built fresh for each invocation from that configuration.

use std::sync::Arc;
use std::time::Duration;

use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_bedrockruntime::config::retry::RetryConfig;
use aws_sdk_bedrockruntime::config::timeout::TimeoutConfig;
use aws_sdk_bedrockruntime::config::Region;
use tracing::info;

use crate::adapter::outbound::clock::SystemClock;
use crate::adapter::outbound::llm::bedrock::Bedrock;
use crate::adapter::outbound::storage::s3::S3Store;
use crate::application::{Archiver, CodegenService, Generator};
use crate::domain::KeyPolicy;
use crate::infrastructure::config::inference::InferenceConfig;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::clock::Clock;
use crate::port::outbound::llm::Llm;
use crate::port::outbound::store::ObjectStore;

/// Resolve the shared AWS configuration from the environment.
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

/// Build a Bedrock runtime client with the configured region, retry budget
/// and read timeout.
///
/// These settings apply to the inference transport only; the object store
/// client keeps the environment defaults.
#[must_use]
pub fn bedrock_client(sdk_config: &SdkConfig, inference: &InferenceConfig) -> aws_sdk_bedrockruntime::Client {
    let conf = aws_sdk_bedrockruntime::config::Builder::from(sdk_config)
        .region(Region::new(inference.region.clone()))
        .retry_config(RetryConfig::standard().with_max_attempts(inference.max_attempts()))
        .timeout_config(
            TimeoutConfig::builder()
                .read_timeout(Duration::from_secs(inference.read_timeout_secs))
                .build(),
        )
        .build();
    aws_sdk_bedrockruntime::Client::from_conf(conf)
}

/// Assemble the service from explicit ports.
#[must_use]
pub fn build_service_with(
    config: &Config,
    llm: Arc<dyn Llm>,
    store: Arc<dyn ObjectStore>,
    clock: Arc<dyn Clock>,
) -> CodegenService {
    CodegenService::new(
        Generator::new(llm, config.inference.decoding.clone()),
        Archiver::new(store),
        config.storage.bucket.clone(),
        config.storage.key_scheme(),
        clock,
    )
}

/// Build the production service backed by Bedrock and S3.
#[must_use]
pub fn build_service(config: &Config, sdk_config: &SdkConfig) -> CodegenService {
    let llm: Arc<dyn Llm> = Arc::new(Bedrock::new(
        bedrock_client(sdk_config, &config.inference),
        &config.inference.model_id,
    ));
    let store: Arc<dyn ObjectStore> = Arc::new(S3Store::from_sdk_config(sdk_config));
    build_service_with(config, llm, store, Arc::new(SystemClock))
}

/// Log the settings that shape every invocation.
pub fn log_startup(config: &Config) {
    info!(
        model_id = %config.inference.model_id,
        region = %config.inference.region,
        bucket = %config.storage.bucket,
        key_policy = ?config.storage.key_policy,
        response_mode = ?config.response_mode,
        "bedrock-codegen starting"
    );
    if config.storage.key_policy == KeyPolicy::Instruction {
        info!("Object keys derive from the instruction only; repeated instructions overwrite");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GenerationRequest, Outcome};
    use crate::testkit::{FixedClock, MockLlm, RecordingStore};

    #[tokio::test]
    async fn service_uses_configured_bucket_and_keys() {
        let config = Config::parse_toml(
            r#"
[storage]
bucket = "custom-bucket"
key_prefix = "out/"
key_suffix = ".txt"
"#,
        )
        .unwrap();
        let store = RecordingStore::new();
        let service = build_service_with(
            &config,
            Arc::new(MockLlm::new("code")),
            Arc::new(store.clone()),
            Arc::new(FixedClock::at(0, 0, 0)),
        );

        let outcome = service.process(&GenerationRequest::new("hello", "python")).await;

        assert_eq!(outcome, Outcome::Stored { key: "out/hello.txt".into() });
        assert_eq!(store.writes()[0].bucket, "custom-bucket");
    }

    #[tokio::test]
    async fn service_sends_configured_decoding() {
        let config = Config::parse_toml("[inference.decoding]\nmax_tokens = 100").unwrap();
        let llm = MockLlm::new("code");
        let service = build_service_with(
            &config,
            Arc::new(llm.clone()),
            Arc::new(RecordingStore::new()),
            Arc::new(FixedClock::at(0, 0, 0)),
        );

        service.process(&GenerationRequest::new("hello", "python")).await;

        assert_eq!(llm.requests()[0].decoding.max_tokens, 100);
    }

    #[tokio::test]
    async fn bedrock_client_applies_region() {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-1"))
            .build();
        let client = bedrock_client(&sdk_config, &InferenceConfig::default());
        assert_eq!(
            client.config().region().map(|r| r.as_ref()),
            Some("us-east-1")
        );
    }

    #[tokio::test]
    async fn bedrock_client_applies_retry_budget_and_read_timeout() {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        let client = bedrock_client(&sdk_config, &InferenceConfig::default());

        assert_eq!(
            client.config().retry_config().map(|r| r.max_attempts()),
            Some(4)
        );
        assert_eq!(
            client.config().timeout_config().and_then(|t| t.read_timeout()),
            Some(Duration::from_secs(300))
        );
    }

    #[tokio::test]
    async fn bedrock_client_without_retries_attempts_once() {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        let inference = InferenceConfig {
            max_retries: 0,
            read_timeout_secs: 30,
            ..InferenceConfig::default()
        };
        let client = bedrock_client(&sdk_config, &inference);

        assert_eq!(
            client.config().retry_config().map(|r| r.max_attempts()),
            Some(1)
        );
        assert_eq!(
            client.config().timeout_config().and_then(|t| t.read_timeout()),
            Some(Duration::from_secs(30))
        );
    }
}
