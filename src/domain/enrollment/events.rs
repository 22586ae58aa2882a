//! Enrollment domain events.
//!
//! Past-tense records of enrollment lifecycle changes, returned to callers
//! alongside the updated aggregate for audit logging and integration. The
//! core itself publishes nothing.

use crate::domain::foundation::{CustomerId, EnrollmentId, PlanId, Timestamp};
use serde::{Deserialize, Serialize};

/// Events that occur during the enrollment lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentEvent {
    /// A customer requested participation; the enrollment entered the
    /// active set in pending status.
    Requested {
        enrollment_id: EnrollmentId,
        plan_id: PlanId,
        customer_id: CustomerId,
        participants: u32,
        occurred_at: Timestamp,
    },

    /// A pending enrollment was confirmed with plan dates.
    Confirmed {
        enrollment_id: EnrollmentId,
        plan_id: PlanId,
        starts_at: Timestamp,
        ends_at: Option<Timestamp>,
        occurred_at: Timestamp,
    },

    /// The plan started for this enrollment.
    Started {
        enrollment_id: EnrollmentId,
        plan_id: PlanId,
        occurred_at: Timestamp,
    },

    /// The plan finished for this enrollment.
    Completed {
        enrollment_id: EnrollmentId,
        plan_id: PlanId,
        occurred_at: Timestamp,
    },

    /// The enrollment was withdrawn; its participants returned to the
    /// plan's available capacity.
    Cancelled {
        enrollment_id: EnrollmentId,
        plan_id: PlanId,
        participants_released: u32,
        reason: Option<String>,
        occurred_at: Timestamp,
    },
}

impl EnrollmentEvent {
    /// Returns the event type string for routing and filtering.
    pub fn event_type(&self) -> &'static str {
        match self {
            EnrollmentEvent::Requested { .. } => "enrollment.requested",
            EnrollmentEvent::Confirmed { .. } => "enrollment.confirmed",
            EnrollmentEvent::Started { .. } => "enrollment.started",
            EnrollmentEvent::Completed { .. } => "enrollment.completed",
            EnrollmentEvent::Cancelled { .. } => "enrollment.cancelled",
        }
    }

    /// Returns the enrollment this event belongs to.
    pub fn enrollment_id(&self) -> &EnrollmentId {
        match self {
            EnrollmentEvent::Requested { enrollment_id, .. }
            | EnrollmentEvent::Confirmed { enrollment_id, .. }
            | EnrollmentEvent::Started { enrollment_id, .. }
            | EnrollmentEvent::Completed { enrollment_id, .. }
            | EnrollmentEvent::Cancelled { enrollment_id, .. } => enrollment_id,
        }
    }

    /// Returns the plan this event belongs to.
    pub fn plan_id(&self) -> &PlanId {
        match self {
            EnrollmentEvent::Requested { plan_id, .. }
            | EnrollmentEvent::Confirmed { plan_id, .. }
            | EnrollmentEvent::Started { plan_id, .. }
            | EnrollmentEvent::Completed { plan_id, .. }
            | EnrollmentEvent::Cancelled { plan_id, .. } => plan_id,
        }
    }

    /// Returns when this event occurred.
    pub fn occurred_at(&self) -> Timestamp {
        match self {
            EnrollmentEvent::Requested { occurred_at, .. }
            | EnrollmentEvent::Confirmed { occurred_at, .. }
            | EnrollmentEvent::Started { occurred_at, .. }
            | EnrollmentEvent::Completed { occurred_at, .. }
            | EnrollmentEvent::Cancelled { occurred_at, .. } => *occurred_at,
        }
    }
}
