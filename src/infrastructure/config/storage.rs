//! Object store configuration.

use serde::Deserialize;

use crate::domain::artifact::{DEFAULT_KEY_PREFIX, DEFAULT_KEY_SUFFIX};
use crate::domain::{KeyPolicy, KeyScheme};

/// Destination bucket and key naming for generated code.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Target bucket.
    ///
    /// Defaults to "bedrock-code-generation-project".
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Prefix placed before the instruction text.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Suffix appended after the instruction text. Does not vary with the
    /// requested language.
    #[serde(default = "default_key_suffix")]
    pub key_suffix: String,

    /// Whether keys carry a timestamp. Defaults to instruction-only keys.
    #[serde(default)]
    pub key_policy: KeyPolicy,
}

impl StorageConfig {
    #[must_use]
    pub fn key_scheme(&self) -> KeyScheme {
        KeyScheme {
            prefix: self.key_prefix.clone(),
            suffix: self.key_suffix.clone(),
            policy: self.key_policy,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            key_prefix: default_key_prefix(),
            key_suffix: default_key_suffix(),
            key_policy: KeyPolicy::default(),
        }
    }
}

fn default_bucket() -> String {
    "bedrock-code-generation-project".into()
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.into()
}

fn default_key_suffix() -> String {
    DEFAULT_KEY_SUFFIX.into()
}
