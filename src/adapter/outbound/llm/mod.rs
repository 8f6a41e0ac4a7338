//! LLM adapter modules.
//!
//! Provides implementations of the [`Llm`](crate::port::outbound::llm::Llm)
//! trait for hosted model providers.

pub mod bedrock;
