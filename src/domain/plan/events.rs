//! Plan domain events.
//!
//! Past-tense records of ownership and lifecycle changes on a plan,
//! returned to callers for audit logging and integration.

use crate::domain::foundation::{EntrepreneurId, PlanId, Timestamp};
use serde::{Deserialize, Serialize};

use super::OwnerRole;

/// Events that occur during a plan's ownership and lifecycle changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanEvent {
    /// A new plan was created in draft status.
    Created {
        plan_id: PlanId,
        name: String,
        occurred_at: Timestamp,
    },

    /// An entrepreneur joined the roster.
    EntrepreneurAdded {
        plan_id: PlanId,
        entrepreneur_id: EntrepreneurId,
        role: OwnerRole,
        principal: bool,
        occurred_at: Timestamp,
    },

    /// An entrepreneur's role changed. `new_principal` is set when the
    /// change demoted the principal and promoted another organizer.
    RoleChanged {
        plan_id: PlanId,
        entrepreneur_id: EntrepreneurId,
        role: OwnerRole,
        new_principal: Option<EntrepreneurId>,
        occurred_at: Timestamp,
    },

    /// An entrepreneur's revenue share was assigned or cleared.
    ShareChanged {
        plan_id: PlanId,
        entrepreneur_id: EntrepreneurId,
        share: Option<u8>,
        occurred_at: Timestamp,
    },

    /// Principal status moved from one entrepreneur to another.
    PrincipalTransferred {
        plan_id: PlanId,
        from: Option<EntrepreneurId>,
        to: EntrepreneurId,
        occurred_at: Timestamp,
    },

    /// An entrepreneur left the roster. `promoted` names the organizer
    /// that inherited principal status, if the removed entry held it.
    EntrepreneurRemoved {
        plan_id: PlanId,
        entrepreneur_id: EntrepreneurId,
        promoted: Option<EntrepreneurId>,
        occurred_at: Timestamp,
    },

    /// The plan moved from draft to active.
    Published {
        plan_id: PlanId,
        occurred_at: Timestamp,
    },

    /// The plan was administratively paused.
    Deactivated {
        plan_id: PlanId,
        occurred_at: Timestamp,
    },

    /// A paused plan was brought back to active.
    Reactivated {
        plan_id: PlanId,
        occurred_at: Timestamp,
    },

    /// Public visibility was toggled.
    VisibilityChanged {
        plan_id: PlanId,
        public: bool,
        occurred_at: Timestamp,
    },

    /// Capacity was administratively changed. `over_commitment` carries
    /// the excess when the new capacity sits below already-committed
    /// active participants.
    CapacityChanged {
        plan_id: PlanId,
        capacity: u32,
        over_commitment: Option<u32>,
        occurred_at: Timestamp,
    },
}

impl PlanEvent {
    /// Returns the event type string for routing and filtering.
    pub fn event_type(&self) -> &'static str {
        match self {
            PlanEvent::Created { .. } => "plan.created",
            PlanEvent::EntrepreneurAdded { .. } => "plan.entrepreneur_added",
            PlanEvent::RoleChanged { .. } => "plan.role_changed",
            PlanEvent::ShareChanged { .. } => "plan.share_changed",
            PlanEvent::PrincipalTransferred { .. } => "plan.principal_transferred",
            PlanEvent::EntrepreneurRemoved { .. } => "plan.entrepreneur_removed",
            PlanEvent::Published { .. } => "plan.published",
            PlanEvent::Deactivated { .. } => "plan.deactivated",
            PlanEvent::Reactivated { .. } => "plan.reactivated",
            PlanEvent::VisibilityChanged { .. } => "plan.visibility_changed",
            PlanEvent::CapacityChanged { .. } => "plan.capacity_changed",
        }
    }

    /// Returns the plan this event belongs to.
    pub fn plan_id(&self) -> &PlanId {
        match self {
            PlanEvent::Created { plan_id, .. }
            | PlanEvent::EntrepreneurAdded { plan_id, .. }
            | PlanEvent::RoleChanged { plan_id, .. }
            | PlanEvent::ShareChanged { plan_id, .. }
            | PlanEvent::PrincipalTransferred { plan_id, .. }
            | PlanEvent::EntrepreneurRemoved { plan_id, .. }
            | PlanEvent::Published { plan_id, .. }
            | PlanEvent::Deactivated { plan_id, .. }
            | PlanEvent::Reactivated { plan_id, .. }
            | PlanEvent::VisibilityChanged { plan_id, .. }
            | PlanEvent::CapacityChanged { plan_id, .. } => plan_id,
        }
    }

    /// Returns when this event occurred.
    pub fn occurred_at(&self) -> Timestamp {
        match self {
            PlanEvent::Created { occurred_at, .. }
            | PlanEvent::EntrepreneurAdded { occurred_at, .. }
            | PlanEvent::RoleChanged { occurred_at, .. }
            | PlanEvent::ShareChanged { occurred_at, .. }
            | PlanEvent::PrincipalTransferred { occurred_at, .. }
            | PlanEvent::EntrepreneurRemoved { occurred_at, .. }
            | PlanEvent::Published { occurred_at, .. }
            | PlanEvent::Deactivated { occurred_at, .. }
            | PlanEvent::Reactivated { occurred_at, .. }
            | PlanEvent::VisibilityChanged { occurred_at, .. }
            | PlanEvent::CapacityChanged { occurred_at, .. } => *occurred_at,
        }
    }
}
