//! Plan status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Being assembled by its owners. Not visible to customers; the
    /// ownership roster may transiently be empty or invalid.
    Draft,

    /// Published and accepting enrollments (when also publicly visible).
    Active,

    /// Administratively paused. Ownership changes require an
    /// administrator; no new enrollments are accepted.
    Inactive,
}

impl PlanStatus {
    /// Returns true if new enrollments may be requested in this status.
    pub fn accepts_enrollments(&self) -> bool {
        matches!(self, PlanStatus::Active)
    }

    /// Returns true if non-administrators may mutate the ownership roster.
    pub fn allows_ownership_changes(&self) -> bool {
        matches!(self, PlanStatus::Draft | PlanStatus::Active)
    }
}

impl StateMachine for PlanStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PlanStatus::*;
        matches!(
            (self, target),
            (Draft, Active) | (Active, Inactive) | (Inactive, Active)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PlanStatus::*;
        match self {
            Draft => vec![Active],
            Active => vec![Inactive],
            Inactive => vec![Active],
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanStatus::Draft => "draft",
            PlanStatus::Active => "active",
            PlanStatus::Inactive => "inactive",
        };
        write!(f, "{}", s)
    }
}
