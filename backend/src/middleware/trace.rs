//! Request tracing: every request runs with a fresh [`TraceId`] in scope and
//! inside a `request` span, and the id is echoed in the `trace-id` response
//! header so clients can quote it when reporting a failure.

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use tracing::{Instrument as _, error, info_span};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware function for [`actix_web::middleware::from_fn`].
///
/// Handlers and domain errors read the id through [`TraceId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use actix_web::middleware::from_fn;
/// use backend::trace_request;
///
/// let app = App::new().wrap(from_fn(trace_request));
/// ```
pub async fn trace_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let trace_id = TraceId::generate();
    let span = info_span!(
        "request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.path(),
    );
    let mut res = TraceId::scope(trace_id, next.call(req))
        .instrument(span)
        .await?;
    match HeaderValue::try_from(trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => error!(%error, %trace_id, "trace id is not a valid header value"),
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error as DomainError;
    use crate::inbound::http::ApiResult;
    use actix_web::middleware::from_fn;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;
    use serde_json::Value;

    async fn traced_call<F, Fut, Res>(handler: F) -> (ServiceResponse<impl MessageBody>, String)
    where
        F: Fn() -> Fut + Clone + 'static,
        Fut: std::future::Future<Output = Res> + 'static,
        Res: actix_web::Responder + 'static,
    {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(trace_request))
                .route("/", web::get().to(handler)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .expect("trace-id header")
            .to_owned();
        (res, header)
    }

    #[rstest]
    #[actix_web::test]
    async fn handler_sees_the_id_sent_in_the_header() {
        let (res, header) = traced_call(|| async {
            let seen = TraceId::current().map(|id| id.to_string());
            HttpResponse::Ok().body(seen.unwrap_or_default())
        })
        .await;

        let body = test::read_body(res).await;
        assert!(header.parse::<TraceId>().is_ok());
        assert_eq!(body, header.as_bytes());
    }

    #[rstest]
    #[actix_web::test]
    async fn error_bodies_carry_the_request_trace_id() {
        let (res, header) =
            traced_call(|| async { ApiResult::<HttpResponse>::Err(DomainError::not_found("gone")) })
                .await;

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["traceId"], header.as_str());
    }

    #[rstest]
    #[actix_web::test]
    async fn consecutive_requests_get_distinct_ids() {
        let (_, first) = traced_call(|| async { HttpResponse::NoContent().finish() }).await;
        let (_, second) = traced_call(|| async { HttpResponse::NoContent().finish() }).await;

        assert_ne!(first, second);
    }
}
