//! Server construction: repository selection, startup seeding and route
//! wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use booking::Trace;
use booking::catalogue_seed::seed_plans_on_startup;
#[cfg(debug_assertions)]
use booking::doc::ApiDoc;
use booking::inbound::http::configure;
use booking::inbound::http::health::{HealthState, live, ready};
use booking::inbound::http::state::HttpState;
use booking::outbound::persistence::DieselPlanRepository;
use booking::settings::AppSettings;
use state_builders::{diesel_http_state, memory_http_state};

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Wire repositories, seed plans when needed and bind the listener.
///
/// # Errors
/// Seeding failures and socket binding errors surface as
/// [`std::io::Error`].
pub async fn create_server(
    health_state: web::Data<HealthState>,
    settings: &AppSettings,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = match db_pool {
        Some(pool) => {
            let outcome = seed_plans_on_startup(settings, &DieselPlanRepository::new(pool.clone()))
                .await
                .map_err(std::io::Error::other)?;
            info!(?outcome, "plan catalogue checked");
            diesel_http_state(&pool)
        }
        None => {
            info!("serving from in-memory repositories");
            memory_http_state(settings)
                .await
                .map_err(std::io::Error::other)?
        }
    };

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
