//! Migration adapter for pre-roster plans.
//!
//! Before plans supported multi-owner rosters, each plan carried a single
//! implicit owner. This adapter turns such a record into a regular plan
//! with a one-entry roster (principal organizer, share unset). It runs
//! once per legacy record at import time; the legacy owner field is never
//! modeled as a parallel mutable field in the core.

use crate::domain::foundation::{
    Actor, Capacity, DurationDays, EntrepreneurId, Money, PlanId,
};

use super::{OwnerRole, OwnershipEntry, Plan, PlanError, RosterPolicy};

/// A plan row as it existed before the multi-owner roster.
#[derive(Debug, Clone)]
pub struct LegacyPlanRecord {
    pub id: PlanId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Capacity,
    pub duration: DurationDays,
    pub base_price: Money,
    pub public: bool,

    /// The single implicit owner of the legacy plan.
    pub owner: EntrepreneurId,
}

impl LegacyPlanRecord {
    /// Converts this legacy record into a draft plan whose roster holds
    /// the legacy owner as principal organizer with no assigned share.
    ///
    /// The migrated plan is left in draft for review; publishing is a
    /// separate, explicit step.
    pub fn migrate(self, roster_policy: RosterPolicy) -> Result<Plan, PlanError> {
        let mut plan = Plan::create(
            self.id,
            self.name,
            self.description,
            self.capacity,
            self.duration,
            self.base_price,
            roster_policy,
        )?;

        plan.add_entrepreneur(
            &Actor::Administrator,
            OwnershipEntry::new(self.owner, OwnerRole::Organizer),
        )?;
        if self.public {
            plan.set_visibility(true);
        }
        Ok(plan)
    }
}
