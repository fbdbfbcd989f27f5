//! HTTP server configuration object.

use std::net::SocketAddr;

use booking::outbound::persistence::DbPool;

/// Builder-style configuration for [`super::create_server`].
///
/// Without a pool the server runs on the in-memory repositories.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Serve from MySQL through the given pool.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
