//! Port for reading the plan catalogue.

use async_trait::async_trait;

use crate::domain::{Plan, PlanId, PlanSearch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by plan repository adapters.
    pub enum PlanRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "plan repository connection failed: {message}",
        /// Query failed during execution or returned an invalid row.
        Query { message: String } => "plan repository query failed: {message}",
    }
}

/// Read access to catalogue plans.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Fetch a plan by identifier. A missing plan is `Ok(None)`.
    async fn find_by_id(&self, id: PlanId) -> Result<Option<Plan>, PlanRepositoryError>;

    /// Plans selected by `search`, ascending by id.
    async fn search(&self, search: &PlanSearch) -> Result<Vec<Plan>, PlanRepositoryError>;

    /// Number of plans in the catalogue.
    async fn count(&self) -> Result<i64, PlanRepositoryError>;

    /// Insert catalogue plans; used by the startup seed.
    async fn insert_all(&self, plans: &[Plan]) -> Result<(), PlanRepositoryError>;
}
