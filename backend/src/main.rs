//! Backend entry-point: loads settings, prepares persistence and serves the
//! booking API.

mod server;

use std::net::SocketAddr;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use booking::inbound::http::health::HealthState;
use booking::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use booking::settings::load_from_env;
use server::{ServerConfig, create_server};

const BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let (app_settings, db_settings) = load_from_env().map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(SocketAddr::from(BIND_ADDR));

    if !app_settings.in_memory {
        let database_url = db_settings.database_url().map_err(std::io::Error::other)?;
        info!(database = %db_settings.redacted_url(), "preparing database");
        run_pending_migrations(&database_url)
            .await
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &app_settings, config).await?;
    server.await
}
