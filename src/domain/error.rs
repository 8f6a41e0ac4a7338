//! Validation errors for incoming generation requests.
//!
//! These are raised while decoding the trigger body, before any outbound
//! call is made.
//!
//! # Examples
//!
//! ```
//! use bedrock_codegen::domain::error::RequestError;
//! use bedrock_codegen::domain::request::GenerationRequest;
//!
//! let result = GenerationRequest::from_body(br#"{"key": "python"}"#);
//! assert!(matches!(result, Err(RequestError::MissingField { field: "message" })));
//! ```

use thiserror::Error;

/// Errors raised when a trigger body cannot be turned into a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The body is not valid JSON.
    #[error("request body is not valid JSON: {reason}")]
    InvalidJson {
        /// Parser message.
        reason: String,
    },

    /// The body is valid JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A required field is present but not a string.
    #[error("field {field} must be a string")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
    },
}
