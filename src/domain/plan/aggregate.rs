//! Plan aggregate entity.
//!
//! The Plan is the single consistency boundary for ownership and enrollment
//! admission. Every mutation is validated against the roster invariants and
//! the capacity ledger before being accepted; a rejected operation changes
//! nothing. Enrollments are referenced, not owned: callers load the plan's
//! enrollment set and pass it in where admission decisions need it.
//!
//! # Design Decisions
//!
//! - **Validate-then-commit**: invariants are checked inside the roster
//!   operations, never patched up after the fact.
//! - **No capacity re-check on transitions**: `request_enrollment` is the
//!   only entry point into the active set, so lifecycle transitions never
//!   re-validate capacity.
//! - **Actor gating**: ownership mutations on a non-draft, non-active plan
//!   require an administrator.

use crate::domain::enrollment::{
    Enrollment, EnrollmentAction, EnrollmentError, EnrollmentEvent, PaymentMethod,
};
use crate::domain::foundation::{
    Actor, Capacity, CustomerId, DurationDays, EnrollmentId, EntrepreneurId, Money,
    ParticipantCount, PlanId, RevenueShare, StateMachine, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::{
    CapacityLedger, OwnerRole, OwnershipEntry, OwnershipRoster, PlanError, PlanEvent,
    PlanSnapshot, PlanStatus, RosterPolicy,
};

/// A multi-day touristic package jointly owned by entrepreneurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for this plan.
    pub id: PlanId,

    /// Display name.
    pub name: String,

    /// Optional long description.
    pub description: Option<String>,

    /// Maximum simultaneous participants.
    pub capacity: Capacity,

    /// Length of the plan in days.
    pub duration: DurationDays,

    /// Current lifecycle status.
    pub status: PlanStatus,

    /// Whether the plan is listed publicly. Only public active plans
    /// accept enrollments.
    pub public: bool,

    /// Base price per participant.
    pub base_price: Money,

    roster: OwnershipRoster,

    /// When the plan was created.
    pub created_at: Timestamp,

    /// When the plan was last updated.
    pub updated_at: Timestamp,
}

impl Plan {
    /// Creates a new draft plan with an empty roster.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` if the name is blank.
    pub fn create(
        id: PlanId,
        name: impl Into<String>,
        description: Option<String>,
        capacity: Capacity,
        duration: DurationDays,
        base_price: Money,
        roster_policy: RosterPolicy,
    ) -> Result<Self, PlanError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlanError::validation("name", "plan name cannot be empty"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            description,
            capacity,
            duration,
            status: PlanStatus::Draft,
            public: false,
            base_price,
            roster: OwnershipRoster::new(roster_policy),
            created_at: now,
            updated_at: now,
        })
    }

    /// Read access to the ownership roster. Mutations go through the
    /// aggregate operations below.
    pub fn roster(&self) -> &OwnershipRoster {
        &self.roster
    }

    // ------------------------------------------------------------------
    // Ownership operations
    // ------------------------------------------------------------------

    /// Adds an entrepreneur to the roster.
    ///
    /// # Errors
    ///
    /// `OwnershipLocked` for non-administrators on an inactive plan, plus
    /// the roster's own rejections.
    pub fn add_entrepreneur(
        &mut self,
        actor: &Actor,
        entry: OwnershipEntry,
    ) -> Result<PlanEvent, PlanError> {
        self.ensure_ownership_open(actor)?;
        let entrepreneur_id = entry.entrepreneur_id;
        self.roster.add(entry)?;
        self.touch();

        // Read back: an empty roster forces the first entry to principal
        // organizer, whatever was requested.
        let added = self
            .roster
            .get(&entrepreneur_id)
            .ok_or(PlanError::EntrepreneurNotInRoster(entrepreneur_id))?;
        Ok(PlanEvent::EntrepreneurAdded {
            plan_id: self.id,
            entrepreneur_id,
            role: added.role,
            principal: added.principal,
            occurred_at: self.updated_at,
        })
    }

    /// Changes an entrepreneur's role, reassigning principal status if the
    /// principal was demoted.
    pub fn update_entrepreneur_role(
        &mut self,
        actor: &Actor,
        entrepreneur_id: EntrepreneurId,
        role: OwnerRole,
    ) -> Result<PlanEvent, PlanError> {
        self.ensure_ownership_open(actor)?;
        let before = self.principal_id();
        self.roster.set_role(&entrepreneur_id, role)?;
        self.touch();

        let after = self.principal_id();
        Ok(PlanEvent::RoleChanged {
            plan_id: self.id,
            entrepreneur_id,
            role,
            new_principal: if before != after { after } else { None },
            occurred_at: self.updated_at,
        })
    }

    /// Assigns or clears an entrepreneur's revenue share.
    pub fn update_entrepreneur_share(
        &mut self,
        actor: &Actor,
        entrepreneur_id: EntrepreneurId,
        share: Option<RevenueShare>,
    ) -> Result<PlanEvent, PlanError> {
        self.ensure_ownership_open(actor)?;
        self.roster.set_share(&entrepreneur_id, share)?;
        self.touch();

        Ok(PlanEvent::ShareChanged {
            plan_id: self.id,
            entrepreneur_id,
            share: share.map(|s| s.value()),
            occurred_at: self.updated_at,
        })
    }

    /// Updates an entrepreneur's participation description.
    pub fn update_entrepreneur_description(
        &mut self,
        actor: &Actor,
        entrepreneur_id: EntrepreneurId,
        description: Option<String>,
    ) -> Result<(), PlanError> {
        self.ensure_ownership_open(actor)?;
        self.roster.set_description(&entrepreneur_id, description)?;
        self.touch();
        Ok(())
    }

    /// Transfers principal status, atomically clearing it elsewhere.
    pub fn set_principal_entrepreneur(
        &mut self,
        actor: &Actor,
        entrepreneur_id: EntrepreneurId,
    ) -> Result<PlanEvent, PlanError> {
        self.ensure_ownership_open(actor)?;
        let from = self.principal_id();
        self.roster.set_principal(&entrepreneur_id)?;
        self.touch();

        Ok(PlanEvent::PrincipalTransferred {
            plan_id: self.id,
            from,
            to: entrepreneur_id,
            occurred_at: self.updated_at,
        })
    }

    /// Removes an entrepreneur, promoting the first remaining organizer
    /// when the removed entry held principal status.
    ///
    /// Draft plans may empty their roster; in any other status the last
    /// entry cannot be removed.
    pub fn remove_entrepreneur(
        &mut self,
        actor: &Actor,
        entrepreneur_id: EntrepreneurId,
    ) -> Result<PlanEvent, PlanError> {
        self.ensure_ownership_open(actor)?;
        let enforce_non_empty = self.status != PlanStatus::Draft;
        let was_principal = self.principal_id() == Some(entrepreneur_id);
        self.roster.remove(&entrepreneur_id, enforce_non_empty)?;
        self.touch();

        Ok(PlanEvent::EntrepreneurRemoved {
            plan_id: self.id,
            entrepreneur_id,
            promoted: if was_principal { self.principal_id() } else { None },
            occurred_at: self.updated_at,
        })
    }

    // ------------------------------------------------------------------
    // Plan lifecycle
    // ------------------------------------------------------------------

    /// Publishes a draft plan, making it active.
    ///
    /// # Errors
    ///
    /// - `NoPrincipalOrganizer` while the roster is not valid
    /// - `InvalidState` unless the plan is a draft
    pub fn publish(&mut self) -> Result<PlanEvent, PlanError> {
        if self.status != PlanStatus::Draft {
            return Err(PlanError::invalid_state(self.status, "publish"));
        }
        if !self.roster.is_valid() {
            return Err(PlanError::NoPrincipalOrganizer);
        }
        self.status = self.status.transition_to(PlanStatus::Active)?;
        self.touch();
        Ok(PlanEvent::Published {
            plan_id: self.id,
            occurred_at: self.updated_at,
        })
    }

    /// Administratively pauses an active plan.
    pub fn deactivate(&mut self) -> Result<PlanEvent, PlanError> {
        if self.status != PlanStatus::Active {
            return Err(PlanError::invalid_state(self.status, "deactivate"));
        }
        self.status = self.status.transition_to(PlanStatus::Inactive)?;
        self.touch();
        Ok(PlanEvent::Deactivated {
            plan_id: self.id,
            occurred_at: self.updated_at,
        })
    }

    /// Brings a paused plan back to active, re-checking roster validity.
    pub fn reactivate(&mut self) -> Result<PlanEvent, PlanError> {
        if self.status != PlanStatus::Inactive {
            return Err(PlanError::invalid_state(self.status, "reactivate"));
        }
        if !self.roster.is_valid() {
            return Err(PlanError::NoPrincipalOrganizer);
        }
        self.status = self.status.transition_to(PlanStatus::Active)?;
        self.touch();
        Ok(PlanEvent::Reactivated {
            plan_id: self.id,
            occurred_at: self.updated_at,
        })
    }

    /// Toggles public visibility.
    pub fn set_visibility(&mut self, public: bool) -> PlanEvent {
        self.public = public;
        self.touch();
        PlanEvent::VisibilityChanged {
            plan_id: self.id,
            public,
            occurred_at: self.updated_at,
        }
    }

    /// Administratively changes capacity.
    ///
    /// A decrease below committed active participants is accepted; the
    /// resulting over-commitment is reported on the event and the
    /// snapshot, never silently clamped away.
    pub fn change_capacity(
        &mut self,
        new_capacity: Capacity,
        enrollments: &[Enrollment],
    ) -> PlanEvent {
        self.capacity = new_capacity;
        self.touch();
        PlanEvent::CapacityChanged {
            plan_id: self.id,
            capacity: new_capacity.value(),
            over_commitment: CapacityLedger::over_commitment(new_capacity, enrollments),
            occurred_at: self.updated_at,
        }
    }

    // ------------------------------------------------------------------
    // Enrollment admission and transitions
    // ------------------------------------------------------------------

    /// Admits a new enrollment request against this plan.
    ///
    /// The caller supplies the plan's current enrollments; admission is
    /// decided against the active subset. The returned enrollment is
    /// pending and already counted active, so persisting it must happen in
    /// the same transaction that loaded the enrollment set.
    ///
    /// # Errors
    ///
    /// - `PlanNotPublic` / `PlanNotActive` when the plan is closed to
    ///   new enrollments
    /// - `CapacityExceeded` when the request does not fit
    pub fn request_enrollment(
        &self,
        enrollments: &[Enrollment],
        customer_id: CustomerId,
        participants: ParticipantCount,
        payment_method: PaymentMethod,
        special_requirements: Option<String>,
    ) -> Result<(Enrollment, EnrollmentEvent), EnrollmentError> {
        if !self.public {
            return Err(EnrollmentError::plan_not_public(self.id));
        }
        if !self.status.accepts_enrollments() {
            return Err(EnrollmentError::plan_not_active(self.id));
        }
        if !CapacityLedger::can_admit(self.capacity, enrollments, participants) {
            return Err(EnrollmentError::capacity_exceeded(
                participants.value(),
                CapacityLedger::available_slots(self.capacity, enrollments),
            ));
        }

        let enrollment = Enrollment::request(
            EnrollmentId::new(),
            self.id,
            customer_id,
            participants,
            self.base_price.times(participants.value()),
            payment_method,
            special_requirements,
        );
        let event = EnrollmentEvent::Requested {
            enrollment_id: enrollment.id,
            plan_id: self.id,
            customer_id,
            participants: participants.value(),
            occurred_at: enrollment.created_at,
        };
        Ok((enrollment, event))
    }

    /// Applies a lifecycle action to one of this plan's enrollments.
    ///
    /// No action here moves an enrollment into the active set, so capacity
    /// is never re-validated.
    pub fn transition_enrollment(
        &self,
        enrollment: &mut Enrollment,
        action: EnrollmentAction,
    ) -> Result<EnrollmentEvent, EnrollmentError> {
        if enrollment.plan_id != self.id {
            return Err(EnrollmentError::validation(
                "plan_id",
                format!("enrollment {} belongs to another plan", enrollment.id),
            ));
        }

        match action {
            EnrollmentAction::Confirm { starts_at, ends_at } => {
                let starts_at = starts_at.ok_or(EnrollmentError::MissingStartDate)?;
                enrollment.confirm(Some(starts_at), ends_at)?;
                Ok(EnrollmentEvent::Confirmed {
                    enrollment_id: enrollment.id,
                    plan_id: self.id,
                    starts_at,
                    ends_at,
                    occurred_at: enrollment.updated_at,
                })
            }
            EnrollmentAction::Begin => {
                enrollment.begin()?;
                Ok(EnrollmentEvent::Started {
                    enrollment_id: enrollment.id,
                    plan_id: self.id,
                    occurred_at: enrollment.updated_at,
                })
            }
            EnrollmentAction::Complete { comments } => {
                enrollment.complete(comments)?;
                Ok(EnrollmentEvent::Completed {
                    enrollment_id: enrollment.id,
                    plan_id: self.id,
                    occurred_at: enrollment.updated_at,
                })
            }
            EnrollmentAction::Cancel { reason } => {
                enrollment.cancel(reason.clone())?;
                Ok(EnrollmentEvent::Cancelled {
                    enrollment_id: enrollment.id,
                    plan_id: self.id,
                    participants_released: enrollment.participants.value(),
                    reason,
                    occurred_at: enrollment.updated_at,
                })
            }
        }
    }

    /// Builds the read model consumed by list/detail views.
    pub fn snapshot(&self, enrollments: &[Enrollment]) -> PlanSnapshot {
        PlanSnapshot::of(self, enrollments)
    }

    fn ensure_ownership_open(&self, actor: &Actor) -> Result<(), PlanError> {
        if actor.is_administrator() || self.status.allows_ownership_changes() {
            Ok(())
        } else {
            Err(PlanError::ownership_locked(self.id, self.status))
        }
    }

    fn principal_id(&self) -> Option<EntrepreneurId> {
        self.roster.principal().map(|e| e.entrepreneur_id)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
