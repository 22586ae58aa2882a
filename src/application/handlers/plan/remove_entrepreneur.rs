//! RemoveEntrepreneurHandler - removes an entrepreneur from a plan.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EntrepreneurId, PlanId};
use crate::domain::plan::{Plan, PlanError, PlanEvent};
use crate::ports::PlanRepository;

/// Command to drop an entrepreneur from a plan's roster.
#[derive(Debug, Clone)]
pub struct RemoveEntrepreneurCommand {
    pub plan_id: PlanId,
    pub actor: Actor,
    pub entrepreneur_id: EntrepreneurId,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct RemoveEntrepreneurResult {
    pub plan: Plan,
    pub event: PlanEvent,
}

/// Handler for roster removals.
pub struct RemoveEntrepreneurHandler {
    repository: Arc<dyn PlanRepository>,
}

impl RemoveEntrepreneurHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RemoveEntrepreneurCommand,
    ) -> Result<RemoveEntrepreneurResult, PlanError> {
        let mut plan = self
            .repository
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(PlanError::NotFound(cmd.plan_id))?;

        let event = plan.remove_entrepreneur(&cmd.actor, cmd.entrepreneur_id)?;
        self.repository.update(&plan).await?;
        tracing::debug!(plan_id = %plan.id, entrepreneur_id = %cmd.entrepreneur_id, "owner removed");

        Ok(RemoveEntrepreneurResult { plan, event })
    }
}
