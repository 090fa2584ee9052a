//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; they are converted into domain
//! records as soon as they are read.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::UserRecord;

use super::schema::lazy_user_records;

/// Row read from a user record set through raw SQL.
#[derive(Debug, Clone, QueryableByName)]
#[diesel(table_name = lazy_user_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRecordRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<UserRecordRow> for UserRecord {
    fn from(row: UserRecordRow) -> Self {
        let UserRecordRow {
            id,
            name,
            email,
            created_at,
            updated_at,
        } = row;
        UserRecord::new(id, name, email).with_timestamps(created_at, updated_at)
    }
}
