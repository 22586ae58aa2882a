//! Enrollment aggregate entity.
//!
//! An Enrollment is a customer's request to participate in a plan for N
//! participants. It is owned by the requesting customer and referenced by
//! (not owned by) the plan. All state changes go through the lifecycle
//! operations below; a rejected operation leaves the enrollment untouched.

use crate::domain::foundation::{
    CustomerId, EnrollmentId, Money, ParticipantCount, PlanId, StateMachine, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::{EnrollmentError, EnrollmentStatus, PaymentMethod};

/// A customer's participation request against one plan.
///
/// # Invariants
///
/// - `participants` is positive
/// - `starts_at` is set for every confirmed enrollment
/// - status changes follow the enrollment state machine; terminal states
///   admit no further mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique identifier for this enrollment.
    pub id: EnrollmentId,

    /// The plan this enrollment is for.
    pub plan_id: PlanId,

    /// The customer who requested it.
    pub customer_id: CustomerId,

    /// Number of participants covered.
    pub participants: ParticipantCount,

    /// Current lifecycle status.
    pub status: EnrollmentStatus,

    /// Price quoted at request time (base price x participants).
    pub requested_price: Money,

    /// How the customer intends to pay.
    pub payment_method: PaymentMethod,

    /// Free-text special requirements from the customer.
    pub special_requirements: Option<String>,

    /// Closing comments recorded at completion.
    pub closing_comments: Option<String>,

    /// Reason recorded at cancellation.
    pub cancellation_reason: Option<String>,

    /// Plan start date for this enrollment, assigned at confirmation.
    pub starts_at: Option<Timestamp>,

    /// Plan end date for this enrollment, optionally assigned at confirmation.
    pub ends_at: Option<Timestamp>,

    /// When the enrollment was requested.
    pub created_at: Timestamp,

    /// When the enrollment was last updated.
    pub updated_at: Timestamp,
}

/// Lifecycle action requested against an existing enrollment.
///
/// None of these actions moves an enrollment *into* the active set, so no
/// capacity re-check is ever needed here; `Enrollment::request` via the plan
/// is the only entry point into the active set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EnrollmentAction {
    /// Confirm a pending enrollment with plan dates.
    Confirm {
        starts_at: Option<Timestamp>,
        ends_at: Option<Timestamp>,
    },

    /// Mark the plan as started for this enrollment.
    Begin,

    /// Mark the plan as finished for this enrollment.
    Complete { comments: Option<String> },

    /// Withdraw the enrollment, releasing its slots.
    Cancel { reason: Option<String> },
}

impl Enrollment {
    /// Creates a new pending enrollment.
    ///
    /// Admission control (capacity, plan visibility) is the plan
    /// aggregate's job; this constructor assumes admission was granted.
    pub fn request(
        id: EnrollmentId,
        plan_id: PlanId,
        customer_id: CustomerId,
        participants: ParticipantCount,
        requested_price: Money,
        payment_method: PaymentMethod,
        special_requirements: Option<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            plan_id,
            customer_id,
            participants,
            status: EnrollmentStatus::Pending,
            requested_price,
            payment_method,
            special_requirements,
            closing_comments: None,
            cancellation_reason: None,
            starts_at: None,
            ends_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if this enrollment counts against plan capacity.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Confirms a pending enrollment, assigning its plan dates.
    ///
    /// # Errors
    ///
    /// - `MissingStartDate` if no start date is supplied
    /// - `InvalidTransition` if the enrollment is not pending
    pub fn confirm(
        &mut self,
        starts_at: Option<Timestamp>,
        ends_at: Option<Timestamp>,
    ) -> Result<(), EnrollmentError> {
        let starts_at = starts_at.ok_or(EnrollmentError::MissingStartDate)?;
        self.transition(EnrollmentStatus::Confirmed)?;
        self.starts_at = Some(starts_at);
        self.ends_at = ends_at;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Marks the plan as started for this enrollment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` unless the enrollment is pending or
    /// confirmed.
    pub fn begin(&mut self) -> Result<(), EnrollmentError> {
        self.transition(EnrollmentStatus::InProgress)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Returns true if a confirmed enrollment's start date has arrived.
    ///
    /// Callers that drive `begin` from the clock rather than an explicit
    /// action poll this.
    pub fn should_begin(&self, now: &Timestamp) -> bool {
        self.status == EnrollmentStatus::Confirmed
            && self.starts_at.as_ref().is_some_and(|start| !start.is_after(now))
    }

    /// Completes the enrollment with optional closing comments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` unless the enrollment is confirmed or
    /// in progress.
    pub fn complete(&mut self, comments: Option<String>) -> Result<(), EnrollmentError> {
        self.transition(EnrollmentStatus::Completed)?;
        self.closing_comments = comments;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Cancels the enrollment, releasing its participants back into the
    /// plan's available capacity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` from terminal states.
    pub fn cancel(&mut self, reason: Option<String>) -> Result<(), EnrollmentError> {
        self.transition(EnrollmentStatus::Cancelled)?;
        self.cancellation_reason = reason;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Applies a lifecycle action.
    pub fn apply(&mut self, action: EnrollmentAction) -> Result<(), EnrollmentError> {
        match action {
            EnrollmentAction::Confirm { starts_at, ends_at } => self.confirm(starts_at, ends_at),
            EnrollmentAction::Begin => self.begin(),
            EnrollmentAction::Complete { comments } => self.complete(comments),
            EnrollmentAction::Cancel { reason } => self.cancel(reason),
        }
    }

    fn transition(&mut self, target: EnrollmentStatus) -> Result<(), EnrollmentError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| EnrollmentError::invalid_transition(self.status, target))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_enrollment() -> Enrollment {
        Enrollment::request(
            EnrollmentId::new(),
            PlanId::new(),
            CustomerId::new(),
            ParticipantCount::try_new(2).unwrap(),
            Money::from_cents(9000),
            PaymentMethod::Card,
            None,
        )
    }

    fn start_date() -> Timestamp {
        Timestamp::now().add_days(14)
    }

    // Construction

    #[test]
    fn request_starts_pending_with_no_dates() {
        let enrollment = test_enrollment();
        assert_eq!(enrollment.status, EnrollmentStatus::Pending);
        assert!(enrollment.starts_at.is_none());
        assert!(enrollment.ends_at.is_none());
        assert!(enrollment.is_active());
    }

    // Confirm

    #[test]
    fn confirm_requires_start_date() {
        let mut enrollment = test_enrollment();
        let result = enrollment.confirm(None, None);
        assert_eq!(result, Err(EnrollmentError::MissingStartDate));
        assert_eq!(enrollment.status, EnrollmentStatus::Pending);
    }

    #[test]
    fn confirm_assigns_dates() {
        let mut enrollment = test_enrollment();
        let start = start_date();
        let end = start.add_days(3);

        enrollment.confirm(Some(start), Some(end)).unwrap();

        assert_eq!(enrollment.status, EnrollmentStatus::Confirmed);
        assert_eq!(enrollment.starts_at, Some(start));
        assert_eq!(enrollment.ends_at, Some(end));
    }

    #[test]
    fn confirm_twice_is_rejected() {
        let mut enrollment = test_enrollment();
        enrollment.confirm(Some(start_date()), None).unwrap();

        let result = enrollment.confirm(Some(start_date()), None);
        assert!(matches!(
            result,
            Err(EnrollmentError::InvalidTransition { .. })
        ));
    }

    // Begin

    #[test]
    fn begin_from_pending_and_confirmed() {
        let mut from_pending = test_enrollment();
        from_pending.begin().unwrap();
        assert_eq!(from_pending.status, EnrollmentStatus::InProgress);

        let mut from_confirmed = test_enrollment();
        from_confirmed.confirm(Some(start_date()), None).unwrap();
        from_confirmed.begin().unwrap();
        assert_eq!(from_confirmed.status, EnrollmentStatus::InProgress);
    }

    #[test]
    fn should_begin_only_once_start_date_arrives() {
        let mut enrollment = test_enrollment();
        let now = Timestamp::now();

        assert!(!enrollment.should_begin(&now));

        enrollment.confirm(Some(now.add_days(7)), None).unwrap();
        assert!(!enrollment.should_begin(&now));
        assert!(enrollment.should_begin(&now.add_days(7)));
        assert!(enrollment.should_begin(&now.add_days(10)));
    }

    // Complete

    #[test]
    fn complete_records_closing_comments() {
        let mut enrollment = test_enrollment();
        enrollment.confirm(Some(start_date()), None).unwrap();
        enrollment.begin().unwrap();

        enrollment
            .complete(Some("great group".to_string()))
            .unwrap();

        assert_eq!(enrollment.status, EnrollmentStatus::Completed);
        assert_eq!(enrollment.closing_comments.as_deref(), Some("great group"));
    }

    #[test]
    fn complete_from_pending_is_rejected() {
        let mut enrollment = test_enrollment();
        assert!(enrollment.complete(None).is_err());
        assert_eq!(enrollment.status, EnrollmentStatus::Pending);
    }

    // Cancel

    #[test]
    fn cancel_records_reason_and_leaves_active_set() {
        let mut enrollment = test_enrollment();
        enrollment.cancel(Some("change of dates".to_string())).unwrap();

        assert_eq!(enrollment.status, EnrollmentStatus::Cancelled);
        assert_eq!(
            enrollment.cancellation_reason.as_deref(),
            Some("change of dates")
        );
        assert!(!enrollment.is_active());
    }

    // Terminal closure

    #[test]
    fn terminal_states_reject_every_action() {
        let mut cancelled = test_enrollment();
        cancelled.cancel(None).unwrap();

        let mut completed = test_enrollment();
        completed.confirm(Some(start_date()), None).unwrap();
        completed.complete(None).unwrap();

        for enrollment in [&mut cancelled, &mut completed] {
            let before = enrollment.clone();
            for action in [
                EnrollmentAction::Confirm {
                    starts_at: Some(start_date()),
                    ends_at: None,
                },
                EnrollmentAction::Begin,
                EnrollmentAction::Complete { comments: None },
                EnrollmentAction::Cancel { reason: None },
            ] {
                let result = enrollment.apply(action);
                assert!(matches!(
                    result,
                    Err(EnrollmentError::InvalidTransition { .. })
                ));
                assert_eq!(*enrollment, before, "state must be unchanged after rejection");
            }
        }
    }

    #[test]
    fn apply_dispatches_to_lifecycle_operations() {
        let mut enrollment = test_enrollment();
        let start = start_date();

        enrollment
            .apply(EnrollmentAction::Confirm {
                starts_at: Some(start),
                ends_at: None,
            })
            .unwrap();
        enrollment.apply(EnrollmentAction::Begin).unwrap();
        enrollment
            .apply(EnrollmentAction::Complete { comments: None })
            .unwrap();

        assert_eq!(enrollment.status, EnrollmentStatus::Completed);
    }
}
