//! Enrollment repository port.
//!
//! Contract for persisting and retrieving enrollments. The active-set
//! query feeds the capacity ledger; it must observe the same transaction
//! that will persist a newly admitted enrollment.

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, EnrollmentId, PlanId};
use async_trait::async_trait;

/// Repository port for Enrollment persistence.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Persists a new enrollment.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if an enrollment with this id already exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, enrollment: &Enrollment) -> Result<(), DomainError>;

    /// Persists changes to an existing enrollment.
    ///
    /// # Errors
    ///
    /// - `EnrollmentNotFound` if the enrollment doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, enrollment: &Enrollment) -> Result<(), DomainError>;

    /// Finds an enrollment by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, DomainError>;

    /// All enrollments referencing the given plan, in creation order.
    async fn find_by_plan(&self, plan_id: &PlanId) -> Result<Vec<Enrollment>, DomainError>;

    /// Enrollments that currently count against the plan's capacity
    /// (pending, confirmed, in progress).
    async fn find_active_by_plan(&self, plan_id: &PlanId) -> Result<Vec<Enrollment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn EnrollmentRepository) {}
    }
}
