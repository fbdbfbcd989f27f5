//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`) are implemented by the domain services and
//! called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod plan_repository;
mod reservation_command;
mod reservation_query;
mod reservation_repository;
mod user_command;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use plan_repository::MockPlanRepository;
pub use plan_repository::{PlanRepository, PlanRepositoryError};
#[cfg(test)]
pub use reservation_command::MockReservationCommand;
pub use reservation_command::{CreateReservationRequest, ReservationCommand};
#[cfg(test)]
pub use reservation_query::MockReservationQuery;
pub use reservation_query::ReservationQuery;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
pub use reservation_repository::{ReservationRepository, ReservationRepositoryError};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::{RegisterUserRequest, UserCommand};
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
