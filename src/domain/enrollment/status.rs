//! Enrollment status state machine.
//!
//! An enrollment progresses pending → confirmed → in_progress → completed,
//! with cancellation reachable from every non-terminal state. Active
//! statuses are the ones that count against plan capacity.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a customer enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    /// Requested by the customer, awaiting confirmation. Counts against capacity.
    Pending,

    /// Confirmed with plan dates assigned. Counts against capacity.
    Confirmed,

    /// The plan has started for this enrollment. Counts against capacity.
    InProgress,

    /// The plan finished. Terminal.
    Completed,

    /// Withdrawn before completion. Terminal; releases capacity.
    Cancelled,
}

impl EnrollmentStatus {
    /// Returns true if this status counts against plan capacity.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            EnrollmentStatus::Pending | EnrollmentStatus::Confirmed | EnrollmentStatus::InProgress
        )
    }
}

impl StateMachine for EnrollmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EnrollmentStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, Confirmed)
                | (Pending, InProgress)
                | (Pending, Cancelled)
            // From CONFIRMED
                | (Confirmed, InProgress)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
            // From IN_PROGRESS
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EnrollmentStatus::*;
        match self {
            Pending => vec![Confirmed, InProgress, Cancelled],
            Confirmed => vec![InProgress, Completed, Cancelled],
            InProgress => vec![Completed, Cancelled],
            Completed => vec![],
            Cancelled => vec![],
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Confirmed => "confirmed",
            EnrollmentStatus::InProgress => "in_progress",
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}
