//! Integration tests for the enrollment lifecycle against plan capacity.
//!
//! Drives the request and transition handlers over the in-memory adapters
//! and checks the capacity invariant end to end: active participants never
//! exceed capacity, cancellations release slots, and administrative
//! capacity cuts surface over-commitment instead of clamping it away.

use std::sync::Arc;

use tourplan::adapters::{InMemoryEnrollmentRepository, InMemoryPlanRepository};
use tourplan::application::handlers::enrollment::{
    RequestEnrollmentCommand, RequestEnrollmentHandler, TransitionEnrollmentCommand,
    TransitionEnrollmentHandler,
};
use tourplan::application::handlers::plan::{GetPlanSnapshotHandler, GetPlanSnapshotQuery};
use tourplan::domain::enrollment::{
    EnrollmentAction, EnrollmentError, EnrollmentStatus, PaymentMethod,
};
use tourplan::domain::foundation::{
    Actor, Capacity, CustomerId, DurationDays, EnrollmentId, EntrepreneurId, Money, PlanId,
    Timestamp,
};
use tourplan::domain::plan::{OwnerRole, OwnershipEntry, Plan, PlanSnapshot, RosterPolicy};
use tourplan::ports::{EnrollmentRepository, PlanRepository};

struct Stack {
    plans: Arc<InMemoryPlanRepository>,
    enrollments: Arc<InMemoryEnrollmentRepository>,
    plan_id: PlanId,
}

impl Stack {
    async fn with_capacity(capacity: u32) -> Self {
        let plans = Arc::new(InMemoryPlanRepository::new());
        let enrollments = Arc::new(InMemoryEnrollmentRepository::new());

        let mut plan = Plan::create(
            PlanId::new(),
            "Salt flats crossing",
            None,
            Capacity::try_new(capacity).unwrap(),
            DurationDays::try_new(2).unwrap(),
            Money::from_cents(90_00),
            RosterPolicy::default(),
        )
        .unwrap();
        plan.add_entrepreneur(
            &Actor::Administrator,
            OwnershipEntry::new(EntrepreneurId::new(), OwnerRole::Organizer),
        )
        .unwrap();
        plan.publish().unwrap();
        plan.set_visibility(true);
        let plan_id = plan.id;
        plans.save(&plan).await.unwrap();

        Self {
            plans,
            enrollments,
            plan_id,
        }
    }

    async fn request(&self, participants: u32) -> Result<EnrollmentId, EnrollmentError> {
        RequestEnrollmentHandler::new(self.plans.clone(), self.enrollments.clone())
            .handle(RequestEnrollmentCommand {
                plan_id: self.plan_id,
                customer_id: CustomerId::new(),
                participants,
                payment_method: PaymentMethod::Card,
                special_requirements: None,
            })
            .await
            .map(|r| r.enrollment.id)
    }

    async fn transition(
        &self,
        enrollment_id: EnrollmentId,
        action: EnrollmentAction,
    ) -> Result<EnrollmentStatus, EnrollmentError> {
        TransitionEnrollmentHandler::new(self.plans.clone(), self.enrollments.clone())
            .handle(TransitionEnrollmentCommand {
                enrollment_id,
                actor: Actor::Administrator,
                action,
            })
            .await
            .map(|r| r.enrollment.status)
    }

    async fn snapshot(&self) -> PlanSnapshot {
        GetPlanSnapshotHandler::new(self.plans.clone(), self.enrollments.clone())
            .handle(GetPlanSnapshotQuery {
                plan_id: self.plan_id,
            })
            .await
            .unwrap()
    }
}

fn confirm_in(days: i64) -> EnrollmentAction {
    EnrollmentAction::Confirm {
        starts_at: Some(Timestamp::now().add_days(days)),
        ends_at: Some(Timestamp::now().add_days(days + 2)),
    }
}

#[tokio::test]
async fn capacity_is_never_oversold_across_requests() {
    let stack = Stack::with_capacity(10).await;

    stack.request(4).await.unwrap();
    stack.request(4).await.unwrap();

    // 8 of 10 committed: a request for 3 must fail, a request for 2 fits.
    let rejected = stack.request(3).await;
    assert_eq!(
        rejected.unwrap_err(),
        EnrollmentError::CapacityExceeded {
            requested: 3,
            available: 2
        }
    );
    stack.request(2).await.unwrap();

    let snapshot = stack.snapshot().await;
    assert_eq!(snapshot.committed_participants, 10);
    assert_eq!(snapshot.available_slots, 0);
    assert_eq!(snapshot.over_commitment, None);
}

#[tokio::test]
async fn cancellation_releases_slots_for_the_same_request() {
    let stack = Stack::with_capacity(10).await;
    let filler = stack.request(10).await.unwrap();

    assert!(stack.request(1).await.is_err());

    stack
        .transition(
            filler,
            EnrollmentAction::Cancel {
                reason: Some("storm warning".to_string()),
            },
        )
        .await
        .unwrap();

    // The identical request now succeeds.
    stack.request(1).await.unwrap();

    let snapshot = stack.snapshot().await;
    assert_eq!(snapshot.enrollments.cancelled, 1);
    assert_eq!(snapshot.enrollments.pending, 1);
    assert_eq!(snapshot.available_slots, 9);
}

#[tokio::test]
async fn confirmed_and_in_progress_enrollments_keep_their_slots() {
    let stack = Stack::with_capacity(6).await;
    let id = stack.request(5).await.unwrap();

    let status = stack.transition(id, confirm_in(7)).await.unwrap();
    assert_eq!(status, EnrollmentStatus::Confirmed);
    assert_eq!(stack.snapshot().await.available_slots, 1);

    let status = stack.transition(id, EnrollmentAction::Begin).await.unwrap();
    assert_eq!(status, EnrollmentStatus::InProgress);
    assert_eq!(stack.snapshot().await.available_slots, 1);

    // Completion takes the enrollment out of the active set.
    let status = stack
        .transition(id, EnrollmentAction::Complete { comments: None })
        .await
        .unwrap();
    assert_eq!(status, EnrollmentStatus::Completed);
    assert_eq!(stack.snapshot().await.available_slots, 6);
}

#[tokio::test]
async fn confirmation_requires_a_start_date() {
    let stack = Stack::with_capacity(4).await;
    let id = stack.request(2).await.unwrap();

    let result = stack
        .transition(
            id,
            EnrollmentAction::Confirm {
                starts_at: None,
                ends_at: None,
            },
        )
        .await;
    assert_eq!(result.unwrap_err(), EnrollmentError::MissingStartDate);

    // Still pending, still holding its slots.
    let snapshot = stack.snapshot().await;
    assert_eq!(snapshot.enrollments.pending, 1);
    assert_eq!(snapshot.available_slots, 2);
}

#[tokio::test]
async fn capacity_cut_below_commitment_surfaces_a_warning() {
    let stack = Stack::with_capacity(10).await;
    stack.request(6).await.unwrap();

    let mut plan = stack.plans.find_by_id(&stack.plan_id).await.unwrap().unwrap();
    let active = stack
        .enrollments
        .find_active_by_plan(&stack.plan_id)
        .await
        .unwrap();
    let event = plan.change_capacity(Capacity::try_new(4).unwrap(), &active);
    stack.plans.update(&plan).await.unwrap();

    assert_eq!(event.event_type(), "plan.capacity_changed");

    let snapshot = stack.snapshot().await;
    assert_eq!(snapshot.capacity, 4);
    assert_eq!(snapshot.committed_participants, 6);
    assert_eq!(snapshot.available_slots, 0);
    assert_eq!(snapshot.over_commitment, Some(2));

    // Over-committed plans admit nothing further.
    assert!(stack.request(1).await.is_err());
}

#[tokio::test]
async fn terminal_enrollments_reject_every_further_action() {
    let stack = Stack::with_capacity(5).await;
    let id = stack.request(2).await.unwrap();

    stack.transition(id, confirm_in(3)).await.unwrap();
    stack
        .transition(id, EnrollmentAction::Complete { comments: None })
        .await
        .unwrap();

    for action in [
        confirm_in(3),
        EnrollmentAction::Begin,
        EnrollmentAction::Complete { comments: None },
        EnrollmentAction::Cancel { reason: None },
    ] {
        let result = stack.transition(id, action).await;
        assert!(matches!(
            result,
            Err(EnrollmentError::InvalidTransition { .. })
        ));
    }
}
