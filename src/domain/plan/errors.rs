//! Plan-specific error types.
//!
//! Covers roster structure, roster invariants, plan lifecycle, and the
//! ownership authorization gate. Enrollment admission errors live in the
//! enrollment context.

use crate::domain::foundation::{DomainError, EntrepreneurId, ErrorCode, PlanId, ValidationError};

use super::PlanStatus;

/// Plan-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Plan was not found.
    NotFound(PlanId),

    /// The entrepreneur already participates in this plan.
    DuplicateEntrepreneur(EntrepreneurId),

    /// The roster has reached its configured maximum size.
    RosterFull { max_entries: usize },

    /// The entrepreneur does not participate in this plan.
    EntrepreneurNotInRoster(EntrepreneurId),

    /// Removing this entry would leave a plan that requires owners
    /// without any.
    CannotRemoveLastEntry,

    /// Accepting the share would push the roster-wide sum past 100.
    ShareExceedsTotal { current_total: u32, requested: u8 },

    /// The roster has no principal organizer, so the plan cannot be
    /// published.
    NoPrincipalOrganizer,

    /// Ownership mutations are locked in the plan's current status for
    /// non-administrators.
    OwnershipLocked { plan_id: PlanId, status: PlanStatus },

    /// Invalid plan status for the requested operation.
    InvalidState {
        current: PlanStatus,
        attempted: &'static str,
    },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl PlanError {
    pub fn not_found(id: PlanId) -> Self {
        PlanError::NotFound(id)
    }

    pub fn duplicate_entrepreneur(id: EntrepreneurId) -> Self {
        PlanError::DuplicateEntrepreneur(id)
    }

    pub fn roster_full(max_entries: usize) -> Self {
        PlanError::RosterFull { max_entries }
    }

    pub fn not_in_roster(id: EntrepreneurId) -> Self {
        PlanError::EntrepreneurNotInRoster(id)
    }

    pub fn share_exceeds_total(current_total: u32, requested: u8) -> Self {
        PlanError::ShareExceedsTotal {
            current_total,
            requested,
        }
    }

    pub fn ownership_locked(plan_id: PlanId, status: PlanStatus) -> Self {
        PlanError::OwnershipLocked { plan_id, status }
    }

    pub fn invalid_state(current: PlanStatus, attempted: &'static str) -> Self {
        PlanError::InvalidState { current, attempted }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlanError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::NotFound(_) => ErrorCode::PlanNotFound,
            PlanError::DuplicateEntrepreneur(_) => ErrorCode::DuplicateEntrepreneur,
            PlanError::RosterFull { .. } => ErrorCode::RosterFull,
            PlanError::EntrepreneurNotInRoster(_) => ErrorCode::EntrepreneurNotInRoster,
            PlanError::CannotRemoveLastEntry => ErrorCode::CannotRemoveLastEntry,
            PlanError::ShareExceedsTotal { .. } => ErrorCode::ShareExceedsTotal,
            PlanError::NoPrincipalOrganizer => ErrorCode::NoPrincipalOrganizer,
            PlanError::OwnershipLocked { .. } => ErrorCode::OwnershipLocked,
            PlanError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            PlanError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            PlanError::NotFound(id) => format!("Plan not found: {}", id),
            PlanError::DuplicateEntrepreneur(id) => {
                format!("Entrepreneur {} already participates in this plan", id)
            }
            PlanError::RosterFull { max_entries } => {
                format!("The plan already has the maximum of {} owners", max_entries)
            }
            PlanError::EntrepreneurNotInRoster(id) => {
                format!("Entrepreneur {} does not participate in this plan", id)
            }
            PlanError::CannotRemoveLastEntry => {
                "A plan must keep at least one participating entrepreneur".to_string()
            }
            PlanError::ShareExceedsTotal {
                current_total,
                requested,
            } => format!(
                "Revenue share of {}% would push the total past 100% (currently {}%)",
                requested, current_total
            ),
            PlanError::NoPrincipalOrganizer => {
                "The plan has no principal organizer".to_string()
            }
            PlanError::OwnershipLocked { plan_id, status } => format!(
                "Ownership of plan {} cannot be changed while it is {}",
                plan_id, status
            ),
            PlanError::InvalidState { current, attempted } => {
                format!("Cannot {} a plan in {} status", attempted, current)
            }
            PlanError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PlanError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PlanError {}

impl From<ValidationError> for PlanError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { field } => PlanError::ValidationFailed {
                message: format!("'{}' cannot be empty", field),
                field,
            },
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => PlanError::ValidationFailed {
                message: format!("must be between {} and {}, got {}", min, max, actual),
                field,
            },
            ValidationError::InvalidFormat { field, reason } => {
                PlanError::ValidationFailed { field, message: reason }
            }
        }
    }
}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        PlanError::Infrastructure(err.to_string())
    }
}

impl From<PlanError> for DomainError {
    fn from(err: PlanError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
