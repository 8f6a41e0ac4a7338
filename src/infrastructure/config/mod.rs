//! Infrastructure configuration modules.

pub mod inference;
pub mod logging;
pub mod response;
pub mod settings;
pub mod storage;
