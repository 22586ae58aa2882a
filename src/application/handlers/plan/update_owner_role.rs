//! UpdateOwnerRoleHandler - changes an entrepreneur's role on a plan.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EntrepreneurId, PlanId};
use crate::domain::plan::{OwnerRole, Plan, PlanError, PlanEvent};
use crate::ports::PlanRepository;

/// Command to change an entrepreneur's role.
#[derive(Debug, Clone)]
pub struct UpdateOwnerRoleCommand {
    pub plan_id: PlanId,
    pub actor: Actor,
    pub entrepreneur_id: EntrepreneurId,
    pub role: OwnerRole,
}

/// Result of a successful role change.
#[derive(Debug, Clone)]
pub struct UpdateOwnerRoleResult {
    pub plan: Plan,
    pub event: PlanEvent,
}

/// Handler for role changes.
pub struct UpdateOwnerRoleHandler {
    repository: Arc<dyn PlanRepository>,
}

impl UpdateOwnerRoleHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateOwnerRoleCommand,
    ) -> Result<UpdateOwnerRoleResult, PlanError> {
        let mut plan = self
            .repository
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(PlanError::NotFound(cmd.plan_id))?;

        let event = plan.update_entrepreneur_role(&cmd.actor, cmd.entrepreneur_id, cmd.role)?;
        self.repository.update(&plan).await?;

        Ok(UpdateOwnerRoleResult { plan, event })
    }
}
