//! Outbound adapters (driven side).

pub mod clock;
pub mod llm;
pub mod storage;
