//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate outbound ports
//! to implement the generate-and-archive flow.

pub mod archiver;
pub mod generator;
pub mod service;

pub use archiver::Archiver;
pub use generator::Generator;
pub use service::CodegenService;
