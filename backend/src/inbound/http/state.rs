//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only on
//! the driving ports and stay testable without I/O.

use std::sync::Arc;

use actix_web::web;

use crate::domain::Error;
use crate::domain::ports::{ReservationCommand, ReservationQuery, UserCommand, UserQuery};
use crate::inbound::http::ApiResult;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub reservations: Arc<dyn ReservationCommand>,
    pub reservations_query: Arc<dyn ReservationQuery>,
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use booking::domain::{ReservationService, UserService};
    /// use booking::inbound::http::state::HttpState;
    /// use booking::outbound::memory::{
    ///     MemoryPlanRepository, MemoryReservationRepository, MemoryUserRepository,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// let users = Arc::new(MemoryUserRepository::default());
    /// let reservations = Arc::new(ReservationService::new(
    ///     users.clone(),
    ///     Arc::new(MemoryPlanRepository::default()),
    ///     Arc::new(MemoryReservationRepository::default()),
    /// ));
    /// let registration = Arc::new(UserService::new(users, Arc::new(DefaultClock)));
    /// let state = HttpState::new(
    ///     reservations.clone(),
    ///     reservations,
    ///     registration.clone(),
    ///     registration,
    /// );
    /// let _query = state.reservations_query.clone();
    /// ```
    pub fn new(
        reservations: Arc<dyn ReservationCommand>,
        reservations_query: Arc<dyn ReservationQuery>,
        users: Arc<dyn UserCommand>,
        users_query: Arc<dyn UserQuery>,
    ) -> Self {
        Self {
            reservations,
            reservations_query,
            users,
            users_query,
        }
    }
}

/// Unwrap handler state, answering 503 when the app was built without it.
pub(crate) fn require_state(
    state: Option<web::Data<HttpState>>,
) -> ApiResult<web::Data<HttpState>> {
    state.ok_or_else(|| Error::service_unavailable("service is not configured"))
}
