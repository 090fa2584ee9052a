//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Adapters translate between Diesel rows and domain records and map every
//! database failure into a port error. Row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselUserRecordCursor, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/lazy_users")).await?;
//! let cursor = DieselUserRecordCursor::new(pool);
//! ```

mod diesel_user_record_cursor;
mod models;
mod pool;
mod schema;

pub use diesel_user_record_cursor::DieselUserRecordCursor;
pub use pool::{DbPool, PoolConfig, PoolError};
