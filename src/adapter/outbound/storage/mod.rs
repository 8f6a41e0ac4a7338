//! Object store adapters.
//!
//! Provides implementations of the
//! [`ObjectStore`](crate::port::outbound::store::ObjectStore) trait.

pub mod s3;
