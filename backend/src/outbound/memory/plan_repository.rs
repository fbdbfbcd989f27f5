//! In-memory plan catalogue.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{PlanRepository, PlanRepositoryError};
use crate::domain::{Plan, PlanId, PlanSearch};

/// Plan catalogue keyed by id, so iteration is already ascending.
#[derive(Debug, Default)]
pub struct MemoryPlanRepository {
    plans: RwLock<BTreeMap<PlanId, Plan>>,
}

impl MemoryPlanRepository {
    /// Start from an existing catalogue.
    pub fn with_plans(plans: impl IntoIterator<Item = Plan>) -> Self {
        let plans = plans.into_iter().map(|plan| (plan.id(), plan)).collect();
        Self {
            plans: RwLock::new(plans),
        }
    }
}

#[async_trait]
impl PlanRepository for MemoryPlanRepository {
    async fn find_by_id(&self, id: PlanId) -> Result<Option<Plan>, PlanRepositoryError> {
        Ok(self.plans.read().await.get(&id).cloned())
    }

    async fn search(&self, search: &PlanSearch) -> Result<Vec<Plan>, PlanRepositoryError> {
        let plans = self.plans.read().await;
        Ok(plans
            .values()
            .filter(|plan| search.matches(plan))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, PlanRepositoryError> {
        let len = self.plans.read().await.len();
        i64::try_from(len).map_err(|err| PlanRepositoryError::query(err.to_string()))
    }

    async fn insert_all(&self, plans: &[Plan]) -> Result<(), PlanRepositoryError> {
        let mut guard = self.plans.write().await;
        if let Some(existing) = plans.iter().find(|plan| guard.contains_key(&plan.id())) {
            return Err(PlanRepositoryError::query(format!(
                "plan {} already exists",
                existing.id()
            )));
        }
        guard.extend(plans.iter().map(|plan| (plan.id(), plan.clone())));
        Ok(())
    }
}
