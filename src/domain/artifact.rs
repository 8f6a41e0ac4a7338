//! Stored artifacts and the object key naming contract.
//!
//! Keys are built from the literal instruction text under a fixed prefix and
//! suffix, e.g. `code-output/implement binary search.py`. No sanitising is
//! applied, so characters that the object store rejects produce a failed
//! write. Identical instructions map to the same key regardless of language
//! and the later write wins.

use chrono::NaiveTime;
use serde::Deserialize;

/// Default prefix for generated objects.
pub const DEFAULT_KEY_PREFIX: &str = "code-output/";

/// Default suffix for generated objects.
pub const DEFAULT_KEY_SUFFIX: &str = ".py";

/// How object keys are derived from a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Key depends on the instruction only. Repeated instructions overwrite.
    #[default]
    Instruction,
    /// An `HHMMSS` stamp is appended to the instruction.
    ///
    /// Reduces collisions between repeated instructions. Requests repeated
    /// within the same second still collide.
    Timestamped,
}

/// Object key derivation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyScheme {
    pub prefix: String,
    pub suffix: String,
    pub policy: KeyPolicy,
}

impl Default for KeyScheme {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_KEY_PREFIX.to_string(),
            suffix: DEFAULT_KEY_SUFFIX.to_string(),
            policy: KeyPolicy::default(),
        }
    }
}

impl KeyScheme {
    /// Derive the object key for an instruction.
    ///
    /// `now` is only consulted under [`KeyPolicy::Timestamped`].
    #[must_use]
    pub fn derive(&self, instruction: &str, now: NaiveTime) -> String {
        match self.policy {
            KeyPolicy::Instruction => format!("{}{}{}", self.prefix, instruction, self.suffix),
            KeyPolicy::Timestamped => format!(
                "{}{}-{}{}",
                self.prefix,
                instruction,
                now.format("%H%M%S"),
                self.suffix
            ),
        }
    }
}

/// Generated code written to the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    pub bucket: String,
    pub key: String,
    pub body: String,
}
