//! Booking domain: entities, use-case services and the ports they depend on.
//!
//! Public surface:
//! - [`Plan`], [`Reservation`], [`User`] and their typed identifiers.
//! - [`ReservationService`] and [`UserService`], which implement the driving
//!   ports in [`ports`].
//! - [`Error`], the transport-agnostic failure payload.

pub mod error;
pub mod plan;
pub mod ports;
pub mod reservation;
pub mod reservation_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::plan::{PLAN_TEXT_MAX, Plan, PlanDraft, PlanId, PlanSearch, PlanValidationError};
pub use self::reservation::{
    GuestCount, NewReservation, Reservation, ReservationId, ReservationValidationError,
    StayDates, StoredReservation,
};
pub use self::reservation_service::{ReservationError, ReservationService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    ContactDetails, NewUser, PHONE_NUMBER_MAX, USER_TEXT_MAX, User, UserId, UserStatus,
    UserValidationError,
};
pub use self::user_service::{UserError, UserService};
