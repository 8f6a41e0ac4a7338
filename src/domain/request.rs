//! Generation request decoded from the trigger body.

use serde_json::{Map, Value};

use super::error::RequestError;

/// Field carrying the natural-language instruction.
pub const MESSAGE_FIELD: &str = "message";

/// Field carrying the target language name.
pub const LANGUAGE_FIELD: &str = "key";

/// A single code generation request.
///
/// Neither field is checked for emptiness: an empty instruction produces a
/// degenerate prompt and an empty-named object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Free-text instruction describing the code to write.
    pub instruction: String,
    /// Target programming language, e.g. "python".
    pub language: String,
}

impl GenerationRequest {
    /// Create a request from its two parts.
    pub fn new(instruction: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            language: language.into(),
        }
    }

    /// Decode a request from a JSON body of the form
    /// `{"message": "...", "key": "..."}`.
    ///
    /// Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the body is not a JSON object or either
    /// field is missing or not a string.
    pub fn from_body(body: &[u8]) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| RequestError::InvalidJson {
            reason: e.to_string(),
        })?;
        let Value::Object(fields) = value else {
            return Err(RequestError::NotAnObject);
        };

        Ok(Self {
            instruction: string_field(&fields, MESSAGE_FIELD)?,
            language: string_field(&fields, LANGUAGE_FIELD)?,
        })
    }
}

fn string_field(fields: &Map<String, Value>, field: &'static str) -> Result<String, RequestError> {
    match fields.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RequestError::InvalidField { field }),
        None => Err(RequestError::MissingField { field }),
    }
}
