//! Port for reservation persistence.
//!
//! Identifiers are assigned by the adapter inside [`ReservationRepository::save`]
//! so concurrent saves never share one.

use async_trait::async_trait;

use crate::domain::{NewReservation, Reservation, ReservationId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by reservation repository adapters.
    pub enum ReservationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "reservation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "reservation repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a priced reservation and return it with its new identifier.
    async fn save(&self, reservation: &NewReservation)
    -> Result<Reservation, ReservationRepositoryError>;

    /// Fetch a reservation by identifier.
    async fn find_by_id(
        &self,
        id: ReservationId,
    ) -> Result<Option<Reservation>, ReservationRepositoryError>;

    /// All reservations ascending by identifier.
    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError>;
}
