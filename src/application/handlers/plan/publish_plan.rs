//! PublishPlanHandler - publishes a draft plan, optionally listing it.

use std::sync::Arc;

use crate::domain::foundation::{Actor, PlanId};
use crate::domain::plan::{Plan, PlanError, PlanEvent};
use crate::ports::PlanRepository;

/// Command to publish a draft plan.
#[derive(Debug, Clone)]
pub struct PublishPlanCommand {
    pub plan_id: PlanId,
    pub actor: Actor,
    /// List the plan publicly in the same step. Most plans go live and
    /// visible together; staged rollouts publish first and list later.
    pub make_public: bool,
}

/// Result of a successful publish.
#[derive(Debug, Clone)]
pub struct PublishPlanResult {
    pub plan: Plan,
    pub events: Vec<PlanEvent>,
}

/// Handler for publishing plans.
pub struct PublishPlanHandler {
    repository: Arc<dyn PlanRepository>,
}

impl PublishPlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: PublishPlanCommand) -> Result<PublishPlanResult, PlanError> {
        let mut plan = self
            .repository
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(PlanError::NotFound(cmd.plan_id))?;

        let mut events = vec![plan.publish()?];
        if cmd.make_public {
            events.push(plan.set_visibility(true));
        }
        self.repository.update(&plan).await?;
        tracing::debug!(plan_id = %plan.id, actor = %cmd.actor, "plan published");

        Ok(PublishPlanResult { plan, events })
    }
}
