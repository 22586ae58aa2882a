//! RequestEnrollmentHandler - admits a new enrollment against a plan.
//!
//! The read-check-write around capacity here is only as strong as the
//! caller's transaction boundary; production adapters must give this
//! handler serializable isolation per plan.

use std::sync::Arc;

use crate::domain::enrollment::{Enrollment, EnrollmentError, EnrollmentEvent, PaymentMethod};
use crate::domain::foundation::{CustomerId, ParticipantCount, PlanId};
use crate::ports::{EnrollmentRepository, PlanRepository};

/// Command to request participation in a plan.
#[derive(Debug, Clone)]
pub struct RequestEnrollmentCommand {
    pub plan_id: PlanId,
    pub customer_id: CustomerId,
    pub participants: u32,
    pub payment_method: PaymentMethod,
    pub special_requirements: Option<String>,
}

/// Result of a successful enrollment request.
#[derive(Debug, Clone)]
pub struct RequestEnrollmentResult {
    pub enrollment: Enrollment,
    pub event: EnrollmentEvent,
}

/// Handler for new enrollment requests.
pub struct RequestEnrollmentHandler {
    plans: Arc<dyn PlanRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl RequestEnrollmentHandler {
    pub fn new(plans: Arc<dyn PlanRepository>, enrollments: Arc<dyn EnrollmentRepository>) -> Self {
        Self { plans, enrollments }
    }

    pub async fn handle(
        &self,
        cmd: RequestEnrollmentCommand,
    ) -> Result<RequestEnrollmentResult, EnrollmentError> {
        let participants = ParticipantCount::try_new(cmd.participants)
            .map_err(|e| EnrollmentError::validation("participants", e.to_string()))?;

        let plan = self
            .plans
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(EnrollmentError::PlanNotFound(cmd.plan_id))?;

        let active = self.enrollments.find_active_by_plan(&cmd.plan_id).await?;
        let (enrollment, event) = plan.request_enrollment(
            &active,
            cmd.customer_id,
            participants,
            cmd.payment_method,
            cmd.special_requirements,
        )?;

        self.enrollments.save(&enrollment).await?;
        tracing::debug!(
            enrollment_id = %enrollment.id,
            plan_id = %cmd.plan_id,
            participants = cmd.participants,
            "enrollment requested"
        );

        Ok(RequestEnrollmentResult { enrollment, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEnrollmentRepository, InMemoryPlanRepository};
    use crate::domain::foundation::{
        Actor, Capacity, DurationDays, EntrepreneurId, Money,
    };
    use crate::domain::plan::{OwnerRole, OwnershipEntry, Plan, RosterPolicy};

    struct Bed {
        plans: Arc<InMemoryPlanRepository>,
        enrollments: Arc<InMemoryEnrollmentRepository>,
        plan_id: PlanId,
    }

    impl Bed {
        fn handler(&self) -> RequestEnrollmentHandler {
            RequestEnrollmentHandler::new(self.plans.clone(), self.enrollments.clone())
        }

        fn command(&self, participants: u32) -> RequestEnrollmentCommand {
            RequestEnrollmentCommand {
                plan_id: self.plan_id,
                customer_id: CustomerId::new(),
                participants,
                payment_method: PaymentMethod::Card,
                special_requirements: None,
            }
        }
    }

    async fn bed_with_capacity(capacity: u32) -> Bed {
        let plans = Arc::new(InMemoryPlanRepository::new());
        let enrollments = Arc::new(InMemoryEnrollmentRepository::new());

        let mut plan = Plan::create(
            PlanId::new(),
            "Island hopper",
            None,
            Capacity::try_new(capacity).unwrap(),
            DurationDays::try_new(2).unwrap(),
            Money::from_cents(70_00),
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

        Bed {
            plans,
            enrollments,
            plan_id,
        }
    }

    #[tokio::test]
    async fn admits_and_persists_within_capacity() {
        let bed = bed_with_capacity(10).await;

        let result = bed.handler().handle(bed.command(4)).await.unwrap();

        assert_eq!(result.event.event_type(), "enrollment.requested");
        let active = bed
            .enrollments
            .find_active_by_plan(&bed.plan_id)
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].requested_price, Money::from_cents(280_00));
    }

    #[tokio::test]
    async fn second_request_sees_the_first_ones_slots() {
        let bed = bed_with_capacity(10).await;
        let handler = bed.handler();

        handler.handle(bed.command(7)).await.unwrap();
        let result = handler.handle(bed.command(4)).await;

        assert_eq!(
            result.unwrap_err(),
            EnrollmentError::CapacityExceeded {
                requested: 4,
                available: 3
            }
        );
        assert_eq!(bed.enrollments.len().await, 1);
    }

    #[tokio::test]
    async fn full_plan_admits_again_after_a_cancellation() {
        let bed = bed_with_capacity(10).await;
        let handler = bed.handler();

        let filler = handler.handle(bed.command(10)).await.unwrap();
        assert!(handler.handle(bed.command(1)).await.is_err());

        let mut enrollment = filler.enrollment;
        enrollment.cancel(None).unwrap();
        bed.enrollments.update(&enrollment).await.unwrap();

        assert!(handler.handle(bed.command(1)).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_zero_participants() {
        let bed = bed_with_capacity(10).await;
        let result = bed.handler().handle(bed.command(0)).await;
        assert!(matches!(result, Err(EnrollmentError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn rejects_unknown_plan() {
        let bed = bed_with_capacity(10).await;
        let cmd = RequestEnrollmentCommand {
            plan_id: PlanId::new(),
            ..bed.command(1)
        };
        let result = bed.handler().handle(cmd).await;
        assert!(matches!(result, Err(EnrollmentError::PlanNotFound(_))));
    }
}
