//! In-memory repositories guarded by `tokio::sync::RwLock`.
//!
//! Readers run in parallel; writers are exclusive, which is what makes
//! reservation id allocation and email uniqueness race free here.

mod plan_repository;
mod reservation_repository;
mod user_repository;

pub use plan_repository::MemoryPlanRepository;
pub use reservation_repository::MemoryReservationRepository;
pub use user_repository::MemoryUserRepository;
