//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`llm`] — `MockLlm`, a scripted [`Llm`](crate::port::outbound::Llm) that
//!   records requests.
//! - [`store`] — `RecordingStore`, an
//!   [`ObjectStore`](crate::port::outbound::ObjectStore) that records writes.
//! - [`clock`] — `FixedClock`.

pub mod clock;
pub mod llm;
pub mod store;

pub use clock::FixedClock;
pub use llm::MockLlm;
pub use store::RecordingStore;
