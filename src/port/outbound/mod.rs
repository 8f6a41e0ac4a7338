//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the infrastructure the function depends on:
//! model inference, object storage and the wall clock.

pub mod clock;
pub mod llm;
pub mod store;

pub use clock::Clock;
pub use llm::{InferenceRequest, Llm};
pub use store::ObjectStore;
