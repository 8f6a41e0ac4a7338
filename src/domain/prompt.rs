//! Prompt construction for the code generation model.
//!
//! The model speaks the Claude text-completion format: alternating human and
//! assistant turns, each introduced by a marker on its own paragraph. The
//! prompt always ends with an open assistant turn so the model continues as
//! the assistant.

/// Marker opening a human turn. Also used as the stop sequence.
pub const HUMAN_MARKER: &str = "\n\nHuman:";

/// Marker opening an assistant turn.
pub const ASSISTANT_MARKER: &str = "\n\nAssistant:";

/// Build the prompt for a coding instruction in the given language.
///
/// Both inputs are embedded verbatim, without escaping or trimming.
///
/// ```
/// use bedrock_codegen::domain::prompt::{build_prompt, ASSISTANT_MARKER};
///
/// let prompt = build_prompt("implement binary search", "python");
/// assert!(prompt.contains("implement binary search"));
/// assert!(prompt.ends_with(ASSISTANT_MARKER));
/// ```
#[must_use]
pub fn build_prompt(instruction: &str, language: &str) -> String {
    format!(
        "{HUMAN_MARKER} Write {language} code for the following instructions: {instruction}.{ASSISTANT_MARKER}"
    )
}
