//! Driving port for creating reservations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Error, ReservationId};

/// Raw reservation request as received from an inbound adapter.
///
/// `user_id` is validated by the service so that malformed identifiers are
/// reported in the documented rejection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReservationRequest {
    pub user_id: String,
    pub plan_id: i64,
    pub number: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationCommand: Send + Sync {
    /// Validate, price and persist a reservation.
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ReservationId, Error>;
}
