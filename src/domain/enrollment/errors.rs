//! Enrollment-specific error types.
//!
//! Every rejection of an enrollment operation is one of these variants;
//! callers surface the reason verbatim or map it to a localized message.
//! Nothing here is used for normal control flow.

use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, PlanId};

use super::EnrollmentStatus;

/// Enrollment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    /// The target plan does not exist.
    PlanNotFound(PlanId),

    /// The enrollment does not exist.
    NotFound(EnrollmentId),

    /// The plan is not publicly visible, so it accepts no new enrollments.
    PlanNotPublic(PlanId),

    /// The plan is not in active status, so it accepts no new enrollments.
    PlanNotActive(PlanId),

    /// The requested participant count exceeds the remaining slots.
    CapacityExceeded { requested: u32, available: u32 },

    /// The attempted lifecycle transition is not permitted from the
    /// current status. State is left unchanged.
    InvalidTransition {
        current: EnrollmentStatus,
        attempted: EnrollmentStatus,
    },

    /// Confirmation was attempted without supplying a plan start date.
    MissingStartDate,

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl EnrollmentError {
    pub fn plan_not_found(id: PlanId) -> Self {
        EnrollmentError::PlanNotFound(id)
    }

    pub fn not_found(id: EnrollmentId) -> Self {
        EnrollmentError::NotFound(id)
    }

    pub fn plan_not_public(id: PlanId) -> Self {
        EnrollmentError::PlanNotPublic(id)
    }

    pub fn plan_not_active(id: PlanId) -> Self {
        EnrollmentError::PlanNotActive(id)
    }

    pub fn capacity_exceeded(requested: u32, available: u32) -> Self {
        EnrollmentError::CapacityExceeded {
            requested,
            available,
        }
    }

    pub fn invalid_transition(current: EnrollmentStatus, attempted: EnrollmentStatus) -> Self {
        EnrollmentError::InvalidTransition { current, attempted }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EnrollmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        EnrollmentError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EnrollmentError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            EnrollmentError::NotFound(_) => ErrorCode::EnrollmentNotFound,
            EnrollmentError::PlanNotPublic(_) => ErrorCode::PlanNotPublic,
            EnrollmentError::PlanNotActive(_) => ErrorCode::PlanNotActive,
            EnrollmentError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            EnrollmentError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            EnrollmentError::MissingStartDate => ErrorCode::MissingStartDate,
            EnrollmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            EnrollmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            EnrollmentError::PlanNotFound(id) => format!("Plan not found: {}", id),
            EnrollmentError::NotFound(id) => format!("Enrollment not found: {}", id),
            EnrollmentError::PlanNotPublic(id) => {
                format!("Plan {} is not open to the public", id)
            }
            EnrollmentError::PlanNotActive(id) => {
                format!("Plan {} is not accepting enrollments", id)
            }
            EnrollmentError::CapacityExceeded {
                requested,
                available,
            } => format!(
                "Requested {} participants but only {} slots remain",
                requested, available
            ),
            EnrollmentError::InvalidTransition { current, attempted } => {
                format!("Cannot move enrollment from {} to {}", current, attempted)
            }
            EnrollmentError::MissingStartDate => {
                "A plan start date is required to confirm an enrollment".to_string()
            }
            EnrollmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            EnrollmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for EnrollmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EnrollmentError {}

impl From<DomainError> for EnrollmentError {
    fn from(err: DomainError) -> Self {
        EnrollmentError::Infrastructure(err.to_string())
    }
}

impl From<EnrollmentError> for DomainError {
    fn from(err: EnrollmentError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
