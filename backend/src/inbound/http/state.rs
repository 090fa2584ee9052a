//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::LazyUsersQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case listing the projected users.
    pub lazy_users: Arc<dyn LazyUsersQuery>,
}

impl HttpState {
    /// Construct state from the lazy users port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::FixtureUserRecordCursor;
    /// use backend::domain::{LazyUsersService, RecordSetName};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let service = LazyUsersService::new(
    ///     Arc::new(FixtureUserRecordCursor::demo()),
    ///     RecordSetName::default(),
    /// );
    /// let state = HttpState::new(Arc::new(service));
    /// let _lazy_users = state.lazy_users.clone();
    /// ```
    pub fn new(lazy_users: Arc<dyn LazyUsersQuery>) -> Self {
        Self { lazy_users }
    }
}
