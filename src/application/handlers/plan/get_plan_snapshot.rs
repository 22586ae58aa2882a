//! GetPlanSnapshotHandler - builds the read model for one plan.

use std::sync::Arc;

use crate::domain::foundation::PlanId;
use crate::domain::plan::{PlanError, PlanSnapshot};
use crate::ports::{EnrollmentRepository, PlanRepository};

/// Query for a plan's current snapshot.
#[derive(Debug, Clone)]
pub struct GetPlanSnapshotQuery {
    pub plan_id: PlanId,
}

/// Handler producing the snapshot consumed by list/detail views.
pub struct GetPlanSnapshotHandler {
    plans: Arc<dyn PlanRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl GetPlanSnapshotHandler {
    pub fn new(plans: Arc<dyn PlanRepository>, enrollments: Arc<dyn EnrollmentRepository>) -> Self {
        Self { plans, enrollments }
    }

    pub async fn handle(&self, query: GetPlanSnapshotQuery) -> Result<PlanSnapshot, PlanError> {
        let plan = self
            .plans
            .find_by_id(&query.plan_id)
            .await?
            .ok_or(PlanError::NotFound(query.plan_id))?;

        let enrollments = self.enrollments.find_by_plan(&query.plan_id).await?;
        Ok(plan.snapshot(&enrollments))
    }
}
