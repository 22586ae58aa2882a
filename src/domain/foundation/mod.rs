//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Tourplan domain.

mod actor;
mod errors;
mod ids;
mod money;
mod quantities;
mod share;
mod state_machine;
mod timestamp;

pub use actor::Actor;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CustomerId, EnrollmentId, EntrepreneurId, PlanId};
pub use money::Money;
pub use quantities::{Capacity, DurationDays, ParticipantCount};
pub use share::RevenueShare;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
