//! Driven port for streaming user records out of the record store.
//!
//! A cursor is opened, drained through a projection, and released within a
//! single `project_all` call. Callers never hold the cursor itself, so it can
//! neither be shared nor outlive the connection backing it.

use async_trait::async_trait;
use futures_util::stream;
use record_stream::{MalformedRecord, TransformError, collect_projected};

use crate::domain::{LazyUser, RecordSetName, UserRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by the record store while a cursor is open.
    pub enum UserRecordCursorError {
        /// No connection to the store could be obtained or it dropped mid-scan.
        Connection => "user record cursor connection failed: {message}",
        /// The store rejected the query or returned an unreadable row.
        Query => "user record cursor query failed: {message}",
    }
}

/// Projection applied to each record while a cursor is drained.
pub type UserRecordProjection = fn(UserRecord) -> Result<LazyUser, MalformedRecord>;

/// Outcome of draining a cursor through a projection.
pub type ProjectionResult = Result<Vec<LazyUser>, TransformError<UserRecordCursorError>>;

/// Port for draining a forward-only cursor over a record set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRecordCursor: Send + Sync {
    /// Open a cursor over `record_set`, project every record in cursor order,
    /// and release the cursor before returning.
    ///
    /// Failures opening the cursor are reported as
    /// [`TransformError::Source`] with nothing consumed.
    async fn project_all(
        &self,
        record_set: &RecordSetName,
        project: UserRecordProjection,
    ) -> ProjectionResult;
}

/// In-memory cursor replaying scripted rows.
///
/// Scripted errors surface exactly where they sit in the sequence, which lets
/// tests fail a scan part way through.
#[derive(Debug, Default, Clone)]
pub struct FixtureUserRecordCursor {
    rows: Vec<Result<UserRecord, UserRecordCursorError>>,
}

impl FixtureUserRecordCursor {
    /// Cursor yielding `records` in order.
    pub fn new(records: impl IntoIterator<Item = UserRecord>) -> Self {
        Self {
            rows: records.into_iter().map(Ok).collect(),
        }
    }

    /// Cursor yielding a fully scripted sequence of rows and failures.
    pub fn scripted(rows: Vec<Result<UserRecord, UserRecordCursorError>>) -> Self {
        Self { rows }
    }

    /// Cursor holding the two demonstration users.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ports::FixtureUserRecordCursor;
    ///
    /// let cursor = FixtureUserRecordCursor::demo();
    /// # let _ = cursor;
    /// ```
    pub fn demo() -> Self {
        Self::new([
            UserRecord::new(1, Some("ann".into()), Some("a@x.com".into())),
            UserRecord::new(2, Some("Bo".into()), Some("b@x.com".into())),
        ])
    }
}

#[async_trait]
impl UserRecordCursor for FixtureUserRecordCursor {
    async fn project_all(
        &self,
        _record_set: &RecordSetName,
        project: UserRecordProjection,
    ) -> ProjectionResult {
        collect_projected(stream::iter(self.rows.iter().cloned()), project).await
    }
}
