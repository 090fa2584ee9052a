//! PostgreSQL-backed user record cursor.
//!
//! Rows are pulled through `load_stream`, so the driver hands them over as
//! they arrive instead of buffering the full result. The pooled connection is
//! checked out and released inside one `project_all` call.

use async_trait::async_trait;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_query;
use diesel_async::RunQueryDsl;
use futures_util::StreamExt as _;
use record_stream::{TransformError, collect_projected};
use tracing::debug;

use crate::domain::ports::{
    ProjectionResult, UserRecordCursor, UserRecordCursorError, UserRecordProjection,
};
use crate::domain::{RecordSetName, UserRecord};

use super::models::UserRecordRow;
use super::pool::{DbPool, PoolError};

/// Diesel-backed implementation of the user record cursor port.
#[derive(Clone)]
pub struct DieselUserRecordCursor {
    pool: DbPool,
}

impl DieselUserRecordCursor {
    /// Create a cursor adapter drawing connections from `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/lazy_users")).await?;
    /// let cursor = DieselUserRecordCursor::new(pool);
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Full-scan query in primary key order.
fn select_all_sql(record_set: &RecordSetName) -> String {
    format!(
        "SELECT id, name, email, created_at, updated_at FROM {} ORDER BY id",
        record_set.quoted()
    )
}

fn map_pool_error(error: PoolError) -> UserRecordCursorError {
    UserRecordCursorError::connection(error.message())
}

fn map_diesel_error(error: DieselError) -> UserRecordCursorError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel cursor operation failed");
        }
        _ => debug!(%error, "diesel cursor operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            UserRecordCursorError::connection(info.message())
        }
        DieselError::BrokenTransactionManager => {
            UserRecordCursorError::connection("connection left in a broken state")
        }
        other => UserRecordCursorError::query(other.to_string()),
    }
}

fn not_opened(source: UserRecordCursorError) -> TransformError<UserRecordCursorError> {
    TransformError::Source {
        consumed: 0,
        source,
    }
}

#[async_trait]
impl UserRecordCursor for DieselUserRecordCursor {
    async fn project_all(
        &self,
        record_set: &RecordSetName,
        project: UserRecordProjection,
    ) -> ProjectionResult {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error)
            .map_err(not_opened)?;

        let rows = sql_query(select_all_sql(record_set))
            .load_stream::<UserRecordRow>(&mut conn)
            .await
            .map_err(map_diesel_error)
            .map_err(not_opened)?;
        let records = rows.map(|row| row.map(UserRecord::from).map_err(map_diesel_error));

        let projected = collect_projected(records, project).await;
        match &projected {
            Ok(users) => debug!(%record_set, count = users.len(), "user record cursor drained"),
            Err(err) => debug!(%record_set, consumed = err.consumed(), "user record cursor aborted"),
        }
        projected
    }
}
