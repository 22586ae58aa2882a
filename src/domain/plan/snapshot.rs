//! Plan read model.
//!
//! The snapshot is what list/detail views consume: the roster, derived
//! availability, and enrollment counts by status. It is computed on read,
//! never stored, so it cannot drift from the aggregates it derives from.

use crate::domain::enrollment::{Enrollment, EnrollmentStatus};
use crate::domain::foundation::{Money, PlanId};
use serde::Serialize;

use super::{CapacityLedger, OwnershipEntry, Plan, PlanStatus};

/// Enrollment tallies by status for one plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrollmentCounts {
    pub pending: u32,
    pub confirmed: u32,
    pub in_progress: u32,
    pub completed: u32,
    pub cancelled: u32,
}

impl EnrollmentCounts {
    /// Tallies the given enrollments by status.
    pub fn tally(enrollments: &[Enrollment]) -> Self {
        let mut counts = Self::default();
        for enrollment in enrollments {
            match enrollment.status {
                EnrollmentStatus::Pending => counts.pending += 1,
                EnrollmentStatus::Confirmed => counts.confirmed += 1,
                EnrollmentStatus::InProgress => counts.in_progress += 1,
                EnrollmentStatus::Completed => counts.completed += 1,
                EnrollmentStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }
}

/// Point-in-time read model of a plan and its enrollment pressure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSnapshot {
    pub plan_id: PlanId,
    pub name: String,
    pub status: PlanStatus,
    pub public: bool,
    pub capacity: u32,
    pub duration_days: u16,
    pub base_price: Money,

    /// Roster entries in insertion order.
    pub owners: Vec<OwnershipEntry>,

    /// Sum of assigned revenue shares.
    pub share_total: u32,

    /// Whether the roster currently satisfies the publishability
    /// invariants.
    pub roster_valid: bool,

    /// Participants committed by active enrollments.
    pub committed_participants: u32,

    /// Remaining slots, floored at zero.
    pub available_slots: u32,

    /// Excess committed participants when capacity was reduced below the
    /// committed total. A warning condition, not an error.
    pub over_commitment: Option<u32>,

    /// Enrollment tallies by status.
    pub enrollments: EnrollmentCounts,
}

impl PlanSnapshot {
    /// Derives the snapshot for a plan from its enrollment set.
    pub fn of(plan: &Plan, enrollments: &[Enrollment]) -> Self {
        Self {
            plan_id: plan.id,
            name: plan.name.clone(),
            status: plan.status,
            public: plan.public,
            capacity: plan.capacity.value(),
            duration_days: plan.duration.value(),
            base_price: plan.base_price,
            owners: plan.roster().entries().to_vec(),
            share_total: plan.roster().share_total(),
            roster_valid: plan.roster().is_valid(),
            committed_participants: CapacityLedger::committed_participants(enrollments),
            available_slots: CapacityLedger::available_slots(plan.capacity, enrollments),
            over_commitment: CapacityLedger::over_commitment(plan.capacity, enrollments),
            enrollments: EnrollmentCounts::tally(enrollments),
        }
    }
}
