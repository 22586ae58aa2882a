//! Capacity ledger: admission decisions for enrollments.
//!
//! Stateless. Availability is always recomputed from the current statuses
//! of a plan's enrollments rather than tracked incrementally, so there is
//! no second source of truth to drift.

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{Capacity, ParticipantCount};

/// Pure admission arithmetic over a plan's capacity and its enrollments.
pub struct CapacityLedger;

impl CapacityLedger {
    /// Sum of participant counts over enrollments that count against
    /// capacity (pending, confirmed, in progress). Non-active enrollments
    /// in the input are ignored.
    pub fn committed_participants(enrollments: &[Enrollment]) -> u32 {
        enrollments
            .iter()
            .filter(|e| e.is_active())
            .map(|e| e.participants.value())
            .sum()
    }

    /// Remaining slots: capacity minus committed participants, floored at
    /// zero. An administratively over-committed plan reports zero here and
    /// the excess through [`over_commitment`](Self::over_commitment).
    pub fn available_slots(capacity: Capacity, enrollments: &[Enrollment]) -> u32 {
        capacity
            .value()
            .saturating_sub(Self::committed_participants(enrollments))
    }

    /// The amount by which committed participants exceed capacity, if they
    /// do. `None` means the plan is within capacity.
    pub fn over_commitment(capacity: Capacity, enrollments: &[Enrollment]) -> Option<u32> {
        let committed = Self::committed_participants(enrollments);
        (committed > capacity.value()).then(|| committed - capacity.value())
    }

    /// Returns true iff the requested participants fit in the remaining
    /// slots.
    pub fn can_admit(
        capacity: Capacity,
        enrollments: &[Enrollment],
        requested: ParticipantCount,
    ) -> bool {
        requested.value() <= Self::available_slots(capacity, enrollments)
    }
}
