//! Structured result of a single invocation.

/// Acknowledgement returned when code was generated and stored.
pub const COMPLETE_MESSAGE: &str = "Code generation complete";

/// What happened to one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Code was generated and written under `key`.
    Stored { key: String },
    /// Code was generated but the write to `key` failed.
    StoreFailed { key: String },
    /// The model produced nothing (call failed or empty completion).
    GenerationFailed,
    /// The trigger body could not be decoded. No outbound call was made.
    BadInput { reason: String },
}

impl Outcome {
    /// HTTP status code reported for this outcome.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Stored { .. } => 200,
            Self::StoreFailed { .. } | Self::GenerationFailed => 502,
            Self::BadInput { .. } => 400,
        }
    }

    /// Human-readable message reported for this outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Stored { .. } => COMPLETE_MESSAGE.to_string(),
            Self::StoreFailed { key } => format!("Code generated but could not be stored at {key}"),
            Self::GenerationFailed => "Code generation failed".to_string(),
            Self::BadInput { reason } => format!("Invalid request: {reason}"),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Stored { .. })
    }
}
