//! Command and query handlers.
//!
//! One handler per external intent; each wraps load, domain mutation, and
//! save around the repository ports.

pub mod enrollment;
pub mod plan;
