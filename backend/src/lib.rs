//! Lazy users backend library modules.
//!
//! Records are streamed from PostgreSQL through a forward-only cursor, projected
//! one at a time and served from `GET /lazy-users` inside a fixed envelope.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::trace_request;
