//! Driving port for reading reservations and searching plans.

use async_trait::async_trait;

use crate::domain::{Error, Plan, Reservation, ReservationId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationQuery: Send + Sync {
    /// Fetch one reservation; absence is reported as a not-found error.
    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, Error>;

    /// All reservations ascending by id.
    async fn list_reservations(&self) -> Result<Vec<Reservation>, Error>;

    /// Plans whose name or keyword contains `keyword`, ignoring case. A blank
    /// keyword returns the whole catalogue.
    async fn search_plans(&self, keyword: &str) -> Result<Vec<Plan>, Error>;
}
