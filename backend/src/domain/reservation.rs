//! Confirmed reservations and the pricing rule that produces their totals.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanId, UserId};

/// Validation errors raised while assembling a reservation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationValidationError {
    #[error("checkout must be after checkin")]
    InvalidDates,
    #[error("number of guests must be at least 1")]
    InvalidNumber,
    #[error("reservation total does not fit in a 64-bit integer")]
    TotalOutOfRange,
    #[error("reservation id must be positive (got {id})")]
    InvalidId { id: i64 },
    #[error("reservation total must not be negative (got {total})")]
    NegativeTotal { total: i64 },
}

/// Positive integer identifier assigned when a reservation is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ReservationId(i64);

impl ReservationId {
    pub fn new(id: i64) -> Result<Self, ReservationValidationError> {
        if id <= 0 {
            return Err(ReservationValidationError::InvalidId { id });
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ReservationId {
    type Error = ReservationValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReservationId> for i64 {
    fn from(value: ReservationId) -> Self {
        value.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checkin and checkout dates with checkout strictly later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl StayDates {
    /// # Examples
    /// ```
    /// use booking::domain::StayDates;
    /// use chrono::NaiveDate;
    ///
    /// let checkin = NaiveDate::from_ymd_opt(2025, 10, 12).expect("date");
    /// let checkout = NaiveDate::from_ymd_opt(2025, 10, 14).expect("date");
    /// let stay = StayDates::new(checkin, checkout).expect("ordered dates");
    /// assert_eq!(stay.nights(), 2);
    /// assert!(StayDates::new(checkin, checkin).is_err());
    /// ```
    pub fn new(
        checkin: NaiveDate,
        checkout: NaiveDate,
    ) -> Result<Self, ReservationValidationError> {
        if checkout <= checkin {
            return Err(ReservationValidationError::InvalidDates);
        }
        Ok(Self { checkin, checkout })
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    /// Whole days between checkin and checkout, never negative.
    pub fn nights(&self) -> i64 {
        nights_between(self.checkin, self.checkout)
    }
}

fn nights_between(checkin: NaiveDate, checkout: NaiveDate) -> i64 {
    checkout.signed_duration_since(checkin).num_days().max(0)
}

/// Number of guests on a reservation, at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestCount(i64);

impl GuestCount {
    pub fn new(number: i64) -> Result<Self, ReservationValidationError> {
        if number < 1 {
            return Err(ReservationValidationError::InvalidNumber);
        }
        Ok(Self(number))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// A priced reservation awaiting an identifier from the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    user_id: UserId,
    plan_id: PlanId,
    guests: GuestCount,
    stay: StayDates,
    total: i64,
}

impl NewReservation {
    /// Price a stay against `plan`: price × guests × nights.
    ///
    /// # Examples
    /// ```
    /// use booking::domain::{
    ///     GuestCount, NewReservation, Plan, PlanDraft, PlanId, StayDates, UserId,
    /// };
    /// use chrono::NaiveDate;
    ///
    /// let plan = Plan::new(PlanDraft {
    ///     id: PlanId::new(100),
    ///     name: "Fuji".to_owned(),
    ///     keyword: String::new(),
    ///     price: 12_000,
    /// })
    /// .expect("valid plan");
    /// let stay = StayDates::new(
    ///     NaiveDate::from_ymd_opt(2025, 10, 12).expect("date"),
    ///     NaiveDate::from_ymd_opt(2025, 10, 14).expect("date"),
    /// )
    /// .expect("ordered dates");
    /// let guests = GuestCount::new(2).expect("guests");
    ///
    /// let draft =
    ///     NewReservation::priced(UserId::random(), &plan, guests, stay).expect("in range");
    /// assert_eq!(draft.total(), 48_000);
    /// ```
    pub fn priced(
        user_id: UserId,
        plan: &Plan,
        guests: GuestCount,
        stay: StayDates,
    ) -> Result<Self, ReservationValidationError> {
        let total = plan
            .price()
            .checked_mul(guests.get())
            .and_then(|subtotal| subtotal.checked_mul(stay.nights()))
            .ok_or(ReservationValidationError::TotalOutOfRange)?;
        Ok(Self {
            user_id,
            plan_id: plan.id(),
            guests,
            stay,
            total,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn plan_id(&self) -> PlanId {
        self.plan_id
    }

    pub fn guests(&self) -> GuestCount {
        self.guests
    }

    pub fn stay(&self) -> StayDates {
        self.stay
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}

/// A persisted reservation.
///
/// ## Invariants
/// - `checkout` is after `checkin` and `number` is at least one.
/// - `total` is non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: ReservationId,
    user_id: UserId,
    plan_id: PlanId,
    number: i64,
    checkin: NaiveDate,
    checkout: NaiveDate,
    total: i64,
}

/// Raw stored fields accepted by [`Reservation::from_stored`].
#[derive(Debug, Clone)]
pub struct StoredReservation {
    pub id: i64,
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub number: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub total: i64,
}

impl Reservation {
    /// Attach the identifier assigned on save.
    pub fn from_new(id: ReservationId, draft: NewReservation) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            plan_id: draft.plan_id,
            number: draft.guests.get(),
            checkin: draft.stay.checkin(),
            checkout: draft.stay.checkout(),
            total: draft.total,
        }
    }

    /// Rebuild a reservation read back from storage, re-checking invariants.
    pub fn from_stored(stored: StoredReservation) -> Result<Self, ReservationValidationError> {
        let id = ReservationId::new(stored.id)?;
        let stay = StayDates::new(stored.checkin, stored.checkout)?;
        let guests = GuestCount::new(stored.number)?;
        if stored.total < 0 {
            return Err(ReservationValidationError::NegativeTotal {
                total: stored.total,
            });
        }
        Ok(Self {
            id,
            user_id: stored.user_id,
            plan_id: stored.plan_id,
            number: guests.get(),
            checkin: stay.checkin(),
            checkout: stay.checkout(),
            total: stored.total,
        })
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn plan_id(&self) -> PlanId {
        self.plan_id
    }

    /// Number of guests.
    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn nights(&self) -> i64 {
        nights_between(self.checkin, self.checkout)
    }
}
