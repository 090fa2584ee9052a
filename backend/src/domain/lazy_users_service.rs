//! Lazy users listing service.
//!
//! Implements [`LazyUsersQuery`] by draining a [`UserRecordCursor`] through
//! [`project_user_record`]. Failures are terminal: no partial listing is ever
//! returned and nothing is retried, since a forward-only cursor cannot resume
//! from the point it failed.

use std::sync::Arc;

use async_trait::async_trait;
use record_stream::TransformError;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{LazyUsersQuery, UserRecordCursor, UserRecordCursorError};
use crate::domain::{Error, LazyUser, RecordSetName, project_user_record};

/// Client-facing message when the record store cannot be reached.
pub const UNAVAILABLE_MESSAGE: &str = "user records are temporarily unavailable";
/// Client-facing message when the store rejects the scan.
pub const QUERY_FAILED_MESSAGE: &str = "user records could not be read";
/// Client-facing message when a stored record lacks a projected attribute.
pub const INCOMPLETE_RECORD_MESSAGE: &str = "a user record is incomplete";

/// Service implementing the lazy users driving port.
#[derive(Clone)]
pub struct LazyUsersService<C> {
    cursor: Arc<C>,
    record_set: RecordSetName,
}

impl<C> LazyUsersService<C> {
    /// Create a service streaming `record_set` through `cursor`.
    pub fn new(cursor: Arc<C>, record_set: RecordSetName) -> Self {
        Self { cursor, record_set }
    }

    /// Record set the service reads from.
    pub fn record_set(&self) -> &RecordSetName {
        &self.record_set
    }
}

fn map_transform_error(
    record_set: &RecordSetName,
    error: TransformError<UserRecordCursorError>,
) -> Error {
    match error {
        TransformError::Source {
            consumed,
            source: UserRecordCursorError::Connection { message },
        } => {
            warn!(%record_set, consumed, %message, "user record cursor lost its connection");
            Error::service_unavailable(UNAVAILABLE_MESSAGE)
                .with_details(json!({ "recordSet": record_set.as_ref() }))
        }
        TransformError::Source {
            consumed,
            source: UserRecordCursorError::Query { message },
        } => {
            error!(%record_set, consumed, %message, "user record cursor query failed");
            Error::internal(QUERY_FAILED_MESSAGE)
                .with_details(json!({ "recordSet": record_set.as_ref() }))
        }
        TransformError::Malformed {
            position,
            attribute,
        } => {
            error!(%record_set, position, attribute, "user record failed projection");
            Error::internal(INCOMPLETE_RECORD_MESSAGE).with_details(json!({
                "recordSet": record_set.as_ref(),
                "position": position,
                "attribute": attribute,
            }))
        }
    }
}

#[async_trait]
impl<C> LazyUsersQuery for LazyUsersService<C>
where
    C: UserRecordCursor,
{
    async fn list_lazy_users(&self) -> Result<Vec<LazyUser>, Error> {
        let users = self
            .cursor
            .project_all(&self.record_set, project_user_record)
            .await
            .map_err(|err| map_transform_error(&self.record_set, err))?;
        info!(record_set = %self.record_set, count = users.len(), "lazy users projected");
        Ok(users)
    }
}
