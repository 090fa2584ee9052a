//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod lazy_users_query;
mod user_record_cursor;

#[cfg(test)]
pub use lazy_users_query::MockLazyUsersQuery;
pub use lazy_users_query::LazyUsersQuery;
#[cfg(test)]
pub use user_record_cursor::MockUserRecordCursor;
pub use user_record_cursor::{
    FixtureUserRecordCursor, ProjectionResult, UserRecordCursor, UserRecordCursorError,
    UserRecordProjection,
};
