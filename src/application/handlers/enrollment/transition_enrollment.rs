//! TransitionEnrollmentHandler - applies a lifecycle action to an
//! enrollment.
//!
//! Confirm, begin, complete and cancel all go through this single entry
//! point; none of them re-checks capacity, because none moves an
//! enrollment into the active set.

use std::sync::Arc;

use crate::domain::enrollment::{Enrollment, EnrollmentAction, EnrollmentError, EnrollmentEvent};
use crate::domain::foundation::{Actor, EnrollmentId};
use crate::ports::{EnrollmentRepository, PlanRepository};

/// Command to move an enrollment through its lifecycle.
#[derive(Debug, Clone)]
pub struct TransitionEnrollmentCommand {
    pub enrollment_id: EnrollmentId,
    pub actor: Actor,
    pub action: EnrollmentAction,
}

/// Result of a successful transition.
#[derive(Debug, Clone)]
pub struct TransitionEnrollmentResult {
    pub enrollment: Enrollment,
    pub event: EnrollmentEvent,
}

/// Handler for enrollment lifecycle transitions.
pub struct TransitionEnrollmentHandler {
    plans: Arc<dyn PlanRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl TransitionEnrollmentHandler {
    pub fn new(plans: Arc<dyn PlanRepository>, enrollments: Arc<dyn EnrollmentRepository>) -> Self {
        Self { plans, enrollments }
    }

    pub async fn handle(
        &self,
        cmd: TransitionEnrollmentCommand,
    ) -> Result<TransitionEnrollmentResult, EnrollmentError> {
        let mut enrollment = self
            .enrollments
            .find_by_id(&cmd.enrollment_id)
            .await?
            .ok_or(EnrollmentError::NotFound(cmd.enrollment_id))?;

        let plan = self
            .plans
            .find_by_id(&enrollment.plan_id)
            .await?
            .ok_or(EnrollmentError::PlanNotFound(enrollment.plan_id))?;

        let event = plan.transition_enrollment(&mut enrollment, cmd.action)?;
        self.enrollments.update(&enrollment).await?;
        tracing::debug!(
            enrollment_id = %enrollment.id,
            actor = %cmd.actor,
            status = %enrollment.status,
            "enrollment transitioned"
        );

        Ok(TransitionEnrollmentResult { enrollment, event })
    }
}
