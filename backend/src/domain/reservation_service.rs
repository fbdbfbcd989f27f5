//! Reservation use cases.
//!
//! [`ReservationService`] validates booking requests in a fixed order, prices
//! them against the plan catalogue and persists the result. It also serves the
//! read side: single lookups, listings and plan search.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    CreateReservationRequest, PlanRepository, PlanRepositoryError, ReservationCommand,
    ReservationQuery, ReservationRepository, ReservationRepositoryError, UserRepository,
    UserRepositoryError,
};
use crate::domain::{
    Error, GuestCount, NewReservation, Plan, PlanId, PlanSearch, Reservation, ReservationId,
    ReservationValidationError, StayDates, UserId,
};

/// Failures of the reservation use cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("user_id must be a 36-character UUID")]
    InvalidUserId,
    #[error("user not found")]
    UserNotFound,
    #[error("checkout must be after checkin")]
    InvalidDates,
    #[error("number must be at least 1")]
    InvalidNumber,
    #[error("plan not found")]
    PlanNotFound,
    #[error("reservation total is out of range")]
    TotalOutOfRange,
    #[error("reservation storage failed: {message}")]
    Storage { message: String },
}

impl ReservationError {
    /// Stable snake_case name used in error details.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUserId => "invalid_user_id",
            Self::UserNotFound => "user_not_found",
            Self::InvalidDates => "invalid_dates",
            Self::InvalidNumber => "invalid_number",
            Self::PlanNotFound => "plan_not_found",
            Self::TotalOutOfRange => "total_out_of_range",
            Self::Storage { .. } => "storage_error",
        }
    }

    fn storage(error: impl std::fmt::Display) -> Self {
        debug!(%error, "reservation persistence failed");
        Self::Storage {
            message: error.to_string(),
        }
    }
}

impl From<ReservationValidationError> for ReservationError {
    fn from(value: ReservationValidationError) -> Self {
        match value {
            ReservationValidationError::InvalidDates => Self::InvalidDates,
            ReservationValidationError::InvalidNumber => Self::InvalidNumber,
            ReservationValidationError::TotalOutOfRange => Self::TotalOutOfRange,
            other @ (ReservationValidationError::InvalidId { .. }
            | ReservationValidationError::NegativeTotal { .. }) => Self::storage(other),
        }
    }
}

impl From<UserRepositoryError> for ReservationError {
    fn from(value: UserRepositoryError) -> Self {
        Self::storage(value)
    }
}

impl From<PlanRepositoryError> for ReservationError {
    fn from(value: PlanRepositoryError) -> Self {
        Self::storage(value)
    }
}

impl From<ReservationRepositoryError> for ReservationError {
    fn from(value: ReservationRepositoryError) -> Self {
        Self::storage(value)
    }
}

impl From<ReservationError> for Error {
    fn from(value: ReservationError) -> Self {
        let details = json!({ "code": value.kind() });
        let error = match &value {
            ReservationError::InvalidUserId
            | ReservationError::InvalidDates
            | ReservationError::InvalidNumber
            | ReservationError::TotalOutOfRange => Error::invalid_request(value.to_string()),
            ReservationError::UserNotFound | ReservationError::PlanNotFound => {
                Error::not_found(value.to_string())
            }
            ReservationError::Storage { .. } => Error::internal(value.to_string()),
        };
        error.with_details(details)
    }
}

/// Reservation service over user, plan and reservation repositories.
#[derive(Clone)]
pub struct ReservationService<U, P, R> {
    users: Arc<U>,
    plans: Arc<P>,
    reservations: Arc<R>,
}

impl<U, P, R> ReservationService<U, P, R>
where
    U: UserRepository,
    P: PlanRepository,
    R: ReservationRepository,
{
    pub fn new(users: Arc<U>, plans: Arc<P>, reservations: Arc<R>) -> Self {
        Self {
            users,
            plans,
            reservations,
        }
    }

    /// Validate, price and save a reservation.
    ///
    /// Checks run in order: user id shape, user existence, dates, guest
    /// count, plan existence. The first failing check is reported.
    pub async fn create(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ReservationError> {
        let CreateReservationRequest {
            user_id,
            plan_id,
            number,
            checkin,
            checkout,
        } = request;

        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ReservationError::InvalidUserId);
        }
        let user_id = UserId::new(user_id).map_err(|_| ReservationError::InvalidUserId)?;

        if self.users.find_by_id(&user_id).await?.is_none() {
            return Err(ReservationError::UserNotFound);
        }

        let stay = StayDates::new(checkin, checkout)?;
        let guests = GuestCount::new(number)?;

        let plan = self
            .plans
            .find_by_id(PlanId::new(plan_id))
            .await?
            .ok_or(ReservationError::PlanNotFound)?;

        let draft = NewReservation::priced(user_id, &plan, guests, stay)?;
        let saved = self.reservations.save(&draft).await?;
        debug!(
            reservation_id = %saved.id(),
            plan_id = %saved.plan_id(),
            total = saved.total(),
            "reservation created"
        );
        Ok(saved)
    }

    /// Fetch a reservation by id.
    pub async fn get(&self, id: ReservationId) -> Result<Option<Reservation>, ReservationError> {
        Ok(self.reservations.find_by_id(id).await?)
    }

    /// All reservations ascending by id.
    pub async fn list(&self) -> Result<Vec<Reservation>, ReservationError> {
        Ok(self.reservations.list().await?)
    }

    /// Search the plan catalogue by keyword.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Plan>, ReservationError> {
        let search = PlanSearch::from_keyword(keyword);
        Ok(self.plans.search(&search).await?)
    }
}

#[async_trait]
impl<U, P, R> ReservationCommand for ReservationService<U, P, R>
where
    U: UserRepository,
    P: PlanRepository,
    R: ReservationRepository,
{
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ReservationId, Error> {
        let reservation = self.create(request).await?;
        Ok(reservation.id())
    }
}

#[async_trait]
impl<U, P, R> ReservationQuery for ReservationService<U, P, R>
where
    U: UserRepository,
    P: PlanRepository,
    R: ReservationRepository,
{
    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, Error> {
        self.get(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("reservation {id} not found")))
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>, Error> {
        Ok(self.list().await?)
    }

    async fn search_plans(&self, keyword: &str) -> Result<Vec<Plan>, Error> {
        Ok(self.search(keyword).await?)
    }
}

#[cfg(test)]
#[path = "reservation_service_tests.rs"]
mod tests;
