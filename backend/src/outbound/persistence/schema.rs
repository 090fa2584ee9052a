//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. The cursor adapter
//! reads through a record set name chosen at runtime, so this table is the
//! row shape every streamed record set must expose.

diesel::table! {
    /// User records served by `GET /lazy-users`.
    lazy_user_records (id) {
        /// Primary key assigned by the store.
        id -> Int8,
        /// Display name; nullable, so projections must handle its absence.
        name -> Nullable<Varchar>,
        /// Email address; nullable for the same reason.
        email -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Nullable<Timestamptz>,
        /// Last modification timestamp.
        updated_at -> Nullable<Timestamptz>,
    }
}
