//! Driving port for the lazily projected users listing.
//!
//! Inbound adapters call this port without knowing how records are stored or
//! streamed. Production backs it with [`crate::domain::LazyUsersService`].

use async_trait::async_trait;

use crate::domain::{Error, LazyUser};

/// Domain use-case port for listing projected users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LazyUsersQuery: Send + Sync {
    /// Return every stored user, projected, in cursor order.
    async fn list_lazy_users(&self) -> Result<Vec<LazyUser>, Error>;
}
