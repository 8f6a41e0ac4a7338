//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the application and the outside world.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!  Lambda event ───▶ │      Application        │
//!                    │  Generator + Archiver   │
//!                    └─────────────────────────┘
//!                       │         │         │
//!                       ▼         ▼         ▼
//!                  ┌─────────┐ ┌───────┐ ┌───────┐
//!                  │   Llm   │ │ Store │ │ Clock │
//!                  │(Bedrock)│ │ (S3)  │ │       │
//!                  └─────────┘ └───────┘ └───────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Llm`](outbound::Llm) - Text completion against a hosted model
//! - [`ObjectStore`](outbound::ObjectStore) - Persistence of generated code
//! - [`Clock`](outbound::Clock) - Time of day for timestamped keys

pub mod outbound;
