//! Bedrock Codegen - natural-language code generation as a Lambda function.
//!
//! Each invocation takes a coding instruction and a target language, asks a
//! model hosted on Amazon Bedrock for the code, and archives the result in
//! Amazon S3.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Requests, prompt template, decoding parameters, key
//!   derivation and outcomes
//! - **`port`** - Outbound traits: `Llm`, `ObjectStore`, `Clock`
//! - **`application`** - `Generator`, `Archiver` and the `CodegenService`
//!   that sequences them
//! - **`adapter`** - Bedrock and S3 implementations, plus the Lambda HTTP
//!   trigger
//! - **`infrastructure`** - TOML configuration, logging and wiring
//!
//! # Features
//!
//! - `testkit` - Expose mock ports for integration tests
//!
//! # Example
//!
//! ```no_run
//! use bedrock_codegen::domain::GenerationRequest;
//! use bedrock_codegen::infrastructure::bootstrap::{build_service, load_sdk_config};
//! use bedrock_codegen::infrastructure::config::settings::Config;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_or_default("config.toml")?;
//! let sdk_config = load_sdk_config().await;
//! let service = build_service(&config, &sdk_config);
//! let outcome = service
//!     .process(&GenerationRequest::new("implement binary search", "python"))
//!     .await;
//! println!("{}", outcome.message());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
