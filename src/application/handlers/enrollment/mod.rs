//! Enrollment command handlers.

mod request_enrollment;
mod transition_enrollment;

pub use request_enrollment::{
    RequestEnrollmentCommand, RequestEnrollmentHandler, RequestEnrollmentResult,
};
pub use transition_enrollment::{
    TransitionEnrollmentCommand, TransitionEnrollmentHandler, TransitionEnrollmentResult,
};
