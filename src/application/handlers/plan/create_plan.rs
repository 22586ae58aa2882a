//! CreatePlanHandler - creates a new draft plan.

use std::sync::Arc;

use crate::domain::foundation::{Capacity, DurationDays, Money, PlanId, Timestamp};
use crate::domain::plan::{Plan, PlanError, PlanEvent, RosterPolicy};
use crate::ports::PlanRepository;

/// Command to create a new plan in draft status.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub name: String,
    pub description: Option<String>,
    pub capacity: u32,
    pub duration_days: u16,
    pub base_price_cents: u32,
}

/// Result of successful plan creation.
#[derive(Debug, Clone)]
pub struct CreatePlanResult {
    pub plan: Plan,
    pub event: PlanEvent,
}

/// Handler for creating plans.
pub struct CreatePlanHandler {
    repository: Arc<dyn PlanRepository>,
    roster_policy: RosterPolicy,
}

impl CreatePlanHandler {
    pub fn new(repository: Arc<dyn PlanRepository>, roster_policy: RosterPolicy) -> Self {
        Self {
            repository,
            roster_policy,
        }
    }

    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<CreatePlanResult, PlanError> {
        let capacity = Capacity::try_new(cmd.capacity)?;
        let duration = DurationDays::try_new(cmd.duration_days)?;

        let plan = Plan::create(
            PlanId::new(),
            cmd.name,
            cmd.description,
            capacity,
            duration,
            Money::from_cents(cmd.base_price_cents),
            self.roster_policy,
        )?;

        self.repository.save(&plan).await?;
        tracing::debug!(plan_id = %plan.id, "plan created");

        let event = PlanEvent::Created {
            plan_id: plan.id,
            name: plan.name.clone(),
            occurred_at: Timestamp::now(),
        };
        Ok(CreatePlanResult { plan, event })
    }
}
