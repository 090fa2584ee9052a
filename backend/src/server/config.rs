//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use backend::domain::RecordSetName;
use backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) record_set: RecordSetName,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration serving fixture records.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, record_set: RecordSetName) -> Self {
        Self {
            bind_addr,
            record_set,
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, `GET /lazy-users` streams from PostgreSQL instead of the
    /// in-memory demonstration records.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
