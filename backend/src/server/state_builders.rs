//! Builders wiring repositories into the services behind [`HttpState`].

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use booking::catalogue_seed::{CatalogueSeedError, seed_plans_on_startup};
use booking::domain::ports::{PlanRepository, ReservationRepository, UserRepository};
use booking::domain::{ReservationService, UserService};
use booking::inbound::http::state::HttpState;
use booking::outbound::memory::{
    MemoryPlanRepository, MemoryReservationRepository, MemoryUserRepository,
};
use booking::outbound::persistence::{
    DbPool, DieselPlanRepository, DieselReservationRepository, DieselUserRepository,
};
use booking::settings::AppSettings;

/// Build handler state from any repository trio.
///
/// The user repository is shared by registration and reservation checks.
pub fn build_http_state<U, P, R>(
    users: Arc<U>,
    plans: Arc<P>,
    reservations: Arc<R>,
    clock: Arc<dyn Clock>,
) -> web::Data<HttpState>
where
    U: UserRepository + 'static,
    P: PlanRepository + 'static,
    R: ReservationRepository + 'static,
{
    let booking = Arc::new(ReservationService::new(users.clone(), plans, reservations));
    let registration = Arc::new(UserService::new(users, clock));
    web::Data::new(HttpState::new(
        booking.clone(),
        booking,
        registration.clone(),
        registration,
    ))
}

/// In-memory state, seeded with the built-in catalogue unless disabled.
pub async fn memory_http_state(
    settings: &AppSettings,
) -> Result<web::Data<HttpState>, CatalogueSeedError> {
    let plans = MemoryPlanRepository::default();
    let outcome = seed_plans_on_startup(settings, &plans).await?;
    info!(?outcome, "plan catalogue checked");
    Ok(build_http_state(
        Arc::new(MemoryUserRepository::default()),
        Arc::new(plans),
        Arc::new(MemoryReservationRepository::default()),
        Arc::new(DefaultClock),
    ))
}

/// MySQL-backed state sharing one pool across the repositories.
pub fn diesel_http_state(pool: &DbPool) -> web::Data<HttpState> {
    build_http_state(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselPlanRepository::new(pool.clone())),
        Arc::new(DieselReservationRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, vec![100, 175, 200])]
    #[case(false, Vec::new())]
    #[tokio::test]
    async fn memory_state_honours_seed_switch(
        #[case] seed_plans: bool,
        #[case] expected: Vec<i64>,
    ) {
        let settings = AppSettings {
            in_memory: true,
            seed_plans,
        };

        let state = memory_http_state(&settings).await.expect("memory state");
        let plans = state
            .reservations_query
            .search_plans("")
            .await
            .expect("plan search");

        let ids: Vec<i64> = plans.iter().map(|plan| plan.id().get()).collect();
        assert_eq!(ids, expected);
    }
}
