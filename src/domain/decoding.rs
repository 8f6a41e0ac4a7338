//! Decoding parameters sent with every inference request.

use serde::Deserialize;

use super::prompt::HUMAN_MARKER;

/// Sampling parameters controlling how the model selects output tokens.
///
/// The defaults are the values the function has always shipped with. They
/// are process-wide and never vary per request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecodingConfig {
    /// Maximum number of tokens to sample.
    ///
    /// Defaults to 2048.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature. Low values keep output near-deterministic.
    ///
    /// Defaults to 0.1.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Top-k sampling cutoff.
    ///
    /// Defaults to 250.
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Nucleus sampling cutoff.
    ///
    /// Defaults to 0.2.
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Sequences that end generation.
    ///
    /// Defaults to the start of a new human turn so the model does not
    /// invent a follow-up exchange.
    #[serde(default = "default_stop_sequences")]
    pub stop_sequences: Vec<String>,
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            stop_sequences: default_stop_sequences(),
        }
    }
}

const fn default_max_tokens() -> u32 {
    2048
}

fn default_temperature() -> f64 {
    0.1
}

const fn default_top_k() -> u32 {
    250
}

fn default_top_p() -> f64 {
    0.2
}

fn default_stop_sequences() -> Vec<String> {
    vec![HUMAN_MARKER.to_string()]
}
