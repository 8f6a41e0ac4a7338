//! Transport-agnostic domain types.
//!
//! - [`request`] - Generation request decoded from the trigger body
//! - [`prompt`] - Prompt template and turn markers
//! - [`decoding`] - Fixed sampling parameters
//! - [`artifact`] - Stored artifacts and object key derivation
//! - [`outcome`] - Structured invocation result
//! - [`error`] - Request validation errors

pub mod artifact;
pub mod decoding;
pub mod error;
pub mod outcome;
pub mod prompt;
pub mod request;

pub use artifact::{KeyPolicy, KeyScheme, StoredArtifact};
pub use decoding::DecodingConfig;
pub use outcome::Outcome;
pub use request::GenerationRequest;
