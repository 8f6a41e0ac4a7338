//! HTTP response reporting mode.

use serde::Deserialize;

/// How invocation outcomes are reported to the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Status code and message follow the outcome (200/400/502).
    #[default]
    Structured,
    /// Always `200 "Code generation complete"` for a decodable request.
    ///
    /// Undecodable requests fail the invocation. Generation and storage
    /// failures are invisible to the caller in this mode.
    Legacy,
}
