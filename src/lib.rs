//! Tourplan - Collaborative Plan Ownership & Enrollment Management
//!
//! This crate implements the domain core of a booking backend for
//! multi-operator tourism plans: joint ownership rosters with revenue
//! splits, and capacity-bounded enrollment lifecycles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
