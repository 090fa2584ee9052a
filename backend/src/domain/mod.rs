//! Domain primitives, services and ports.
//!
//! Purpose: keep record projection and failure semantics independent of
//! HTTP and storage. Adapters in `inbound` and `outbound` depend on this
//! module, never the other way round.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - TraceId — request-scoped correlation identifier.
//! - UserRecord / LazyUser / project_user_record — stored rows and their projection.
//! - RecordSetName — validated table name a cursor is opened over.
//! - LazyUsersService — driving port implementation over a record cursor.

pub mod error;
mod lazy_users_service;
pub mod ports;
mod record_set;
mod trace_id;
mod user_record;

pub use self::error::{Error, ErrorCode};
pub use self::lazy_users_service::{
    INCOMPLETE_RECORD_MESSAGE, LazyUsersService, QUERY_FAILED_MESSAGE, UNAVAILABLE_MESSAGE,
};
pub use self::record_set::{DEFAULT_RECORD_SET, RecordSetName, RecordSetNameError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user_record::{LazyUser, UserRecord, project_user_record};
