//! In-memory enrollment repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::enrollment::Enrollment;
use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, PlanId};
use crate::ports::EnrollmentRepository;

/// HashMap-backed implementation of [`EnrollmentRepository`].
///
/// Plan-scoped queries return enrollments in creation order.
#[derive(Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: RwLock<HashMap<EnrollmentId, Enrollment>>,
}

impl InMemoryEnrollmentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored enrollments.
    pub async fn len(&self) -> usize {
        self.enrollments.read().await.len()
    }

    async fn by_plan(&self, plan_id: &PlanId, active_only: bool) -> Vec<Enrollment> {
        let mut matched: Vec<Enrollment> = self
            .enrollments
            .read()
            .await
            .values()
            .filter(|e| e.plan_id == *plan_id && (!active_only || e.is_active()))
            .cloned()
            .collect();
        matched.sort_by_key(|e| e.created_at);
        matched
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn save(&self, enrollment: &Enrollment) -> Result<(), DomainError> {
        let mut enrollments = self.enrollments.write().await;
        if enrollments.contains_key(&enrollment.id) {
            return Err(DomainError::validation(
                "enrollment_id",
                format!("Enrollment {} already exists", enrollment.id),
            ));
        }
        enrollments.insert(enrollment.id, enrollment.clone());
        Ok(())
    }

    async fn update(&self, enrollment: &Enrollment) -> Result<(), DomainError> {
        let mut enrollments = self.enrollments.write().await;
        if !enrollments.contains_key(&enrollment.id) {
            return Err(DomainError::new(
                ErrorCode::EnrollmentNotFound,
                format!("Enrollment {} does not exist", enrollment.id),
            ));
        }
        enrollments.insert(enrollment.id, enrollment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, DomainError> {
        Ok(self.enrollments.read().await.get(id).cloned())
    }

    async fn find_by_plan(&self, plan_id: &PlanId) -> Result<Vec<Enrollment>, DomainError> {
        Ok(self.by_plan(plan_id, false).await)
    }

    async fn find_active_by_plan(&self, plan_id: &PlanId) -> Result<Vec<Enrollment>, DomainError> {
        Ok(self.by_plan(plan_id, true).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::PaymentMethod;
    use crate::domain::foundation::{CustomerId, Money, ParticipantCount};

    fn enrollment_for(plan_id: PlanId, participants: u32) -> Enrollment {
        Enrollment::request(
            EnrollmentId::new(),
            plan_id,
            CustomerId::new(),
            ParticipantCount::try_new(participants).unwrap(),
            Money::from_cents(10_00),
            PaymentMethod::Card,
            None,
        )
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let repo = InMemoryEnrollmentRepository::new();
        let enrollment = enrollment_for(PlanId::new(), 2);

        repo.save(&enrollment).await.unwrap();
        assert_eq!(
            repo.find_by_id(&enrollment.id).await.unwrap(),
            Some(enrollment)
        );
    }

    #[tokio::test]
    async fn plan_queries_filter_by_plan_and_status() {
        let repo = InMemoryEnrollmentRepository::new();
        let plan_id = PlanId::new();

        let active = enrollment_for(plan_id, 2);
        let mut cancelled = enrollment_for(plan_id, 3);
        cancelled.cancel(None).unwrap();
        let unrelated = enrollment_for(PlanId::new(), 1);

        repo.save(&active).await.unwrap();
        repo.save(&cancelled).await.unwrap();
        repo.save(&unrelated).await.unwrap();

        let all = repo.find_by_plan(&plan_id).await.unwrap();
        assert_eq!(all.len(), 2);

        let active_only = repo.find_active_by_plan(&plan_id).await.unwrap();
        assert_eq!(active_only.len(), 1);
        assert_eq!(active_only[0].id, active.id);
    }

    #[tokio::test]
    async fn update_requires_existing_enrollment() {
        let repo = InMemoryEnrollmentRepository::new();
        let enrollment = enrollment_for(PlanId::new(), 1);

        let result = repo.update(&enrollment).await;
        assert_eq!(result.unwrap_err().code, ErrorCode::EnrollmentNotFound);
    }
}
