//! AddEntrepreneurHandler - adds an entrepreneur to a plan's roster.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EntrepreneurId, PlanId, RevenueShare};
use crate::domain::plan::{OwnerRole, OwnershipEntry, Plan, PlanError, PlanEvent};
use crate::ports::PlanRepository;

/// Command to add an entrepreneur to a plan.
#[derive(Debug, Clone)]
pub struct AddEntrepreneurCommand {
    pub plan_id: PlanId,
    pub actor: Actor,
    pub entrepreneur_id: EntrepreneurId,
    pub role: OwnerRole,
    pub description: Option<String>,
    pub share: Option<u8>,
}

/// Result of a successful roster addition.
#[derive(Debug, Clone)]
pub struct AddEntrepreneurResult {
    pub plan: Plan,
    pub event: PlanEvent,
}

/// Handler for adding entrepreneurs to plan rosters.
pub struct AddEntrepreneurHandler {
    repository: Arc<dyn PlanRepository>,
}

impl AddEntrepreneurHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AddEntrepreneurCommand,
    ) -> Result<AddEntrepreneurResult, PlanError> {
        let mut plan = self
            .repository
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(PlanError::NotFound(cmd.plan_id))?;

        let mut entry = OwnershipEntry::new(cmd.entrepreneur_id, cmd.role);
        entry.description = cmd.description;
        entry.share = cmd.share.map(RevenueShare::try_new).transpose()?;

        let event = plan.add_entrepreneur(&cmd.actor, entry)?;
        self.repository.update(&plan).await?;

        Ok(AddEntrepreneurResult { plan, event })
    }
}
