//! UpdateOwnerShareHandler - assigns or clears a revenue share.

use std::sync::Arc;

use crate::domain::foundation::{Actor, EntrepreneurId, PlanId, RevenueShare};
use crate::domain::plan::{Plan, PlanError, PlanEvent};
use crate::ports::PlanRepository;

/// Command to set an entrepreneur's revenue share. `None` clears it.
#[derive(Debug, Clone)]
pub struct UpdateOwnerShareCommand {
    pub plan_id: PlanId,
    pub actor: Actor,
    pub entrepreneur_id: EntrepreneurId,
    pub share: Option<u8>,
}

/// Result of a successful share change.
#[derive(Debug, Clone)]
pub struct UpdateOwnerShareResult {
    pub plan: Plan,
    pub event: PlanEvent,
}

/// Handler for revenue share changes.
pub struct UpdateOwnerShareHandler {
    repository: Arc<dyn PlanRepository>,
}

impl UpdateOwnerShareHandler {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateOwnerShareCommand,
    ) -> Result<UpdateOwnerShareResult, PlanError> {
        let mut plan = self
            .repository
            .find_by_id(&cmd.plan_id)
            .await?
            .ok_or(PlanError::NotFound(cmd.plan_id))?;

        let share = cmd.share.map(RevenueShare::try_new).transpose()?;
        let event = plan.update_entrepreneur_share(&cmd.actor, cmd.entrepreneur_id, share)?;
        self.repository.update(&plan).await?;

        Ok(UpdateOwnerShareResult { plan, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPlanRepository;
    use crate::domain::foundation::{Capacity, DurationDays, Money};
    use crate::domain::plan::{OwnerRole, OwnershipEntry, RosterPolicy};

    async fn seeded(
    ) -> (Arc<InMemoryPlanRepository>, PlanId, EntrepreneurId, EntrepreneurId) {
        let repo = Arc::new(InMemoryPlanRepository::new());
        let mut plan = Plan::create(
            PlanId::new(),
            "Cave descent",
            None,
            Capacity::try_new(5).unwrap(),
            DurationDays::try_new(1).unwrap(),
            Money::from_cents(65_00),
            RosterPolicy::default(),
        )
        .unwrap();
        let a = EntrepreneurId::new();
        let b = EntrepreneurId::new();
        plan.add_entrepreneur(&Actor::Administrator, OwnershipEntry::new(a, OwnerRole::Organizer))
            .unwrap();
        plan.add_entrepreneur(
            &Actor::Administrator,
            OwnershipEntry::new(b, OwnerRole::Collaborator),
        )
        .unwrap();
        plan.update_entrepreneur_share(
            &Actor::Administrator,
            a,
            Some(RevenueShare::try_new(60).unwrap()),
        )
        .unwrap();
        let id = plan.id;
        repo.save(&plan).await.unwrap();
        (repo, id, a, b)
    }

    #[tokio::test]
    async fn share_that_busts_the_total_is_rejected_and_not_persisted() {
        let (repo, plan_id, _, b) = seeded().await;

        let result = UpdateOwnerShareHandler::new(repo.clone())
            .handle(UpdateOwnerShareCommand {
                plan_id,
                actor: Actor::Administrator,
                entrepreneur_id: b,
                share: Some(50),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            PlanError::ShareExceedsTotal {
                current_total: 60,
                requested: 50
            }
        );

        let stored = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        assert_eq!(stored.roster().share_total(), 60);
    }

    #[tokio::test]
    async fn share_within_the_total_is_persisted() {
        let (repo, plan_id, _, b) = seeded().await;

        let result = UpdateOwnerShareHandler::new(repo.clone())
            .handle(UpdateOwnerShareCommand {
                plan_id,
                actor: Actor::Administrator,
                entrepreneur_id: b,
                share: Some(40),
            })
            .await
            .unwrap();

        assert_eq!(result.event.event_type(), "plan.share_changed");
        let stored = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        assert_eq!(stored.roster().share_total(), 100);
    }

    #[tokio::test]
    async fn clearing_a_share_persists() {
        let (repo, plan_id, a, _) = seeded().await;

        UpdateOwnerShareHandler::new(repo.clone())
            .handle(UpdateOwnerShareCommand {
                plan_id,
                actor: Actor::Administrator,
                entrepreneur_id: a,
                share: None,
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(&plan_id).await.unwrap().unwrap();
        assert_eq!(stored.roster().share_total(), 0);
    }
}
