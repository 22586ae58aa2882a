//! Plan repository port.
//!
//! Contract for persisting and retrieving Plan aggregates. The core never
//! performs I/O itself; implementations are expected to give each call
//! serializable isolation per plan (e.g. a row lock keyed by plan id) so
//! that read-check-write sequences around capacity stay atomic.

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::Plan;
use async_trait::async_trait;

/// Repository port for Plan aggregate persistence.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Persists a new plan.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a plan with this id already exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Persists changes to an existing plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Finds a plan by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;
}
