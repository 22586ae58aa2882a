//! SetPrincipalOwnerHandler - transfers principal status on a plan.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EntrepreneurId, PlanId};
use crate::domain::plan::{Plan, PlanError, PlanEvent};
use crate::ports::PlanRepository;

/// Command to make an entrepreneur the plan's principal organizer.
#[derive(Debug, Clone)]
pub struct SetPrincipalOwnerCommand {
    pub plan_id: PlanId,
    pub actor: Actor,
    pub entrepreneur_id: EntrepreneurId,
}

/// Result of a successful principal transfer.
#[derive(Debug, Clone)]
pub struct SetPrincipalOwnerResult {
    pub plan: Plan,
    pub event: PlanEvent,
}

/// Handler for principal transfers.
pub struct SetPrincipalOwnerHandler {
    repository: Arc<dyn PlanRepository>,
}

impl SetPrincipalOwnerHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SetPrincipalOwnerCommand,
    ) -> Result<SetPrincipalOwnerResult, PlanError> {
        let mut plan = self
            .repository
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(PlanError::NotFound(cmd.plan_id))?;

        let event = plan.set_principal_entrepreneur(&cmd.actor, cmd.entrepreneur_id)?;
        self.repository.update(&plan).await?;

        Ok(SetPrincipalOwnerResult { plan, event })
    }
}
