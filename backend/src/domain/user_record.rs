//! Stored user records and their upper-cased projection.

use chrono::{DateTime, Utc};
use record_stream::MalformedRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user row as read from the record store.
///
/// Name and email are nullable columns, so a record may lack either. The
/// timestamps are carried along but never projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: i64,
    name: Option<String>,
    email: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Build a record with no audit timestamps.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserRecord;
    ///
    /// let record = UserRecord::new(1, Some("ann".into()), Some("a@x.com".into()));
    /// assert_eq!(record.id(), 1);
    /// assert_eq!(record.name(), Some("ann"));
    /// ```
    pub fn new(id: i64, name: Option<String>, email: Option<String>) -> Self {
        Self {
            id,
            name,
            email,
            created_at: None,
            updated_at: None,
        }
    }

    /// Attach the audit timestamps stored alongside the row.
    pub fn with_timestamps(
        mut self,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name, if present.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Email address, if present.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Row creation timestamp, if recorded.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Last modification timestamp, if recorded.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// Projection of a [`UserRecord`] returned by `GET /lazy-users`.
///
/// Field order is part of the response contract: `id`, `name`, `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LazyUser {
    /// Store-assigned identifier, copied unchanged.
    #[schema(example = 1)]
    pub id: i64,
    /// Upper-cased display name.
    #[schema(example = "ANN")]
    pub name: String,
    /// Email address, copied unchanged.
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Project a stored record into a [`LazyUser`].
///
/// ASCII letters in the name are upper-cased; every other character is kept
/// as is.
///
/// # Errors
///
/// Returns [`MalformedRecord`] naming `name` or `email` when that attribute is
/// missing. `name` is checked first.
///
/// # Examples
/// ```
/// use backend::domain::{UserRecord, project_user_record};
///
/// let user = project_user_record(UserRecord::new(2, Some("Bo".into()), Some("b@x.com".into())))
///     .expect("complete record");
/// assert_eq!(user.name, "BO");
/// ```
pub fn project_user_record(record: UserRecord) -> Result<LazyUser, MalformedRecord> {
    let UserRecord {
        id, name, email, ..
    } = record;
    let name = name.ok_or(MalformedRecord::missing("name"))?;
    let email = email.ok_or(MalformedRecord::missing("email"))?;
    Ok(LazyUser {
        id,
        name: name.to_ascii_uppercase(),
        email,
    })
}
