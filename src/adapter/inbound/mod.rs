//! Inbound adapters (driving side).

pub mod lambda;
