//! Adapters - implementations of the ports.
//!
//! Only the in-memory adapters live in the core crate; durable storage is
//! the embedding application's concern.

pub mod memory;

pub use memory::{InMemoryEnrollmentRepository, InMemoryPlanRepository};
