//! Constant-memory projection of forward-only record sources.
//!
//! Database cursors hand rows over one at a time. This crate drains such a
//! source through a per-record projection and accumulates only the projected
//! values, so the raw rows are never resident together.
//!
//! Sources are taken by value: a cursor is consumed exactly once and cannot be
//! rewound or shared. A failure part way through the source discards the
//! projected prefix; callers see a [`TransformError`], never a truncated list.
//!
//! # Example
//!
//! ```
//! use record_stream::{MalformedRecord, collect_projected_iter};
//!
//! let rows: Vec<Result<Option<&str>, std::io::Error>> = vec![Ok(Some("ann")), Ok(Some("bo"))];
//! let names = collect_projected_iter(rows, |row| {
//!     row.map(str::to_ascii_uppercase)
//!         .ok_or(MalformedRecord::missing("name"))
//! });
//! assert_eq!(names.ok(), Some(vec!["ANN".to_owned(), "BO".to_owned()]));
//! ```

mod collect;
mod error;

pub use collect::{collect_projected, collect_projected_iter};
pub use error::{MalformedRecord, TransformError};
