//! Rendering of domain errors as HTTP responses.
//!
//! Every failure leaves the service as JSON with a status derived from its
//! [`ErrorCode`] and, when the request was traced, a `trace-id` header. The
//! same [`respond`] helper renders both plain error payloads and the
//! `/lazy-users` failure envelope.
//!
//! Messages built by the domain are fixed strings, so they are shown as is.
//! Structured details of internal errors name record sets and positions and
//! are withheld from clients.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for handlers that fail with a domain error.
pub type ApiResult<T> = Result<T, Error>;

/// Message used when an actix failure is surfaced as a domain error.
pub const UNEXPECTED_MESSAGE: &str = "unexpected server failure";

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render `body` with the status and trace header belonging to `error`.
pub(crate) fn respond<T: Serialize>(error: &Error, body: &T) -> HttpResponse {
    let mut response = HttpResponse::build(status_for(error.code()));
    if let Some(id) = error.trace_id() {
        response.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
    response.json(body)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        respond(self, &self.for_client())
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal(UNEXPECTED_MESSAGE)
    }
}

/// Fallback for requests that match no route.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::error::not_found;
///
/// let _app = App::new().default_service(web::to(not_found));
/// ```
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("resource not found"))
}
