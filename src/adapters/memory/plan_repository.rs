//! In-memory plan repository.
//!
//! Backs the handler test-beds and embedding callers that need no durable
//! store. Each call locks the whole map, which gives the per-plan
//! serializable isolation the core expects from its callers.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

/// HashMap-backed implementation of [`PlanRepository`].
#[derive(Default)]
pub struct InMemoryPlanRepository {
    plans: RwLock<HashMap<PlanId, Plan>>,
}

impl InMemoryPlanRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored plans.
    pub async fn len(&self) -> usize {
        self.plans.read().await.len()
    }

    /// Returns true when no plans are stored.
    pub async fn is_empty(&self) -> bool {
        self.plans.read().await.is_empty()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut plans = self.plans.write().await;
        if plans.contains_key(&plan.id) {
            return Err(DomainError::validation(
                "plan_id",
                format!("Plan {} already exists", plan.id),
            ));
        }
        plans.insert(plan.id, plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut plans = self.plans.write().await;
        if !plans.contains_key(&plan.id) {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Plan {} does not exist", plan.id),
            ));
        }
        plans.insert(plan.id, plan.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        Ok(self.plans.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Capacity, DurationDays, Money};
    use crate::domain::plan::RosterPolicy;

    fn test_plan() -> Plan {
        Plan::create(
            PlanId::new(),
            "Coastal kayak",
            None,
            Capacity::try_new(6).unwrap(),
            DurationDays::try_new(1).unwrap(),
            Money::from_cents(20_00),
            RosterPolicy::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let repo = InMemoryPlanRepository::new();
        let plan = test_plan();

        repo.save(&plan).await.unwrap();
        let found = repo.find_by_id(&plan.id).await.unwrap();

        assert_eq!(found, Some(plan));
    }

    #[tokio::test]
    async fn save_rejects_duplicate_id() {
        let repo = InMemoryPlanRepository::new();
        let plan = test_plan();

        repo.save(&plan).await.unwrap();
        let result = repo.save(&plan).await;

        assert!(result.is_err());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn update_requires_existing_plan() {
        let repo = InMemoryPlanRepository::new();
        let plan = test_plan();

        let result = repo.update(&plan).await;
        assert_eq!(result.unwrap_err().code, ErrorCode::PlanNotFound);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryPlanRepository::new();
        assert_eq!(repo.find_by_id(&PlanId::new()).await.unwrap(), None);
    }
}
