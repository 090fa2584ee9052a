//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the lazy users listing, the health probes and the
//! schemas they return. The document backs Swagger UI in debug builds and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, LazyUser};
use crate::inbound::http::lazy_users::LazyUsersEnvelope;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lazy users API",
        description = "Streams stored users through a forward-only cursor and lists them with upper-cased names."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::lazy_users::list_lazy_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(LazyUsersEnvelope, LazyUser, Error, ErrorCode)),
    tags(
        (name = "lazy-users", description = "Streamed user listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
