//! Lazy users HTTP handler.
//!
//! ```text
//! GET /lazy-users
//! ```
//!
//! Both outcomes share one envelope so clients branch on `status` alone:
//!
//! ```text
//! {"status":true,"message":"Lazy Collection Example","data":[{"id":1,"name":"ANN","email":"a@x.com"}]}
//! {"status":false,"message":"user records are temporarily unavailable","data":[]}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, LazyUser};
use crate::inbound::http::error::respond;
use crate::inbound::http::state::HttpState;

/// Message attached to every successful listing.
pub const LAZY_USERS_MESSAGE: &str = "Lazy Collection Example";

/// Response envelope for `GET /lazy-users`.
///
/// Field order is part of the wire contract.
#[derive(Debug, Serialize, ToSchema)]
pub struct LazyUsersEnvelope {
    /// `true` when the listing was produced in full.
    pub status: bool,
    /// Fixed success message, or the failure description.
    #[schema(example = "Lazy Collection Example")]
    pub message: String,
    /// Projected users in record order; empty on failure.
    pub data: Vec<LazyUser>,
}

impl LazyUsersEnvelope {
    /// Envelope for a fully projected listing.
    pub fn success(data: Vec<LazyUser>) -> Self {
        Self {
            status: true,
            message: LAZY_USERS_MESSAGE.to_owned(),
            data,
        }
    }

    /// Envelope for a failed listing, carrying the failure's fixed message.
    pub fn failure(error: &Error) -> Self {
        Self {
            status: false,
            message: error.message().to_owned(),
            data: Vec::new(),
        }
    }
}

/// List every stored user with its name upper-cased.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::lazy_users::list_lazy_users;
///
/// let app = App::new().service(list_lazy_users);
/// ```
#[utoipa::path(
    get,
    path = "/lazy-users",
    responses(
        (status = 200, description = "Projected users", body = LazyUsersEnvelope),
        (status = 500, description = "Record store failure", body = LazyUsersEnvelope),
        (status = 503, description = "Record store unavailable", body = LazyUsersEnvelope)
    ),
    tags = ["lazy-users"],
    operation_id = "listLazyUsers"
)]
#[get("/lazy-users")]
pub async fn list_lazy_users(state: web::Data<HttpState>) -> HttpResponse {
    match state.lazy_users.list_lazy_users().await {
        Ok(users) => HttpResponse::Ok().json(LazyUsersEnvelope::success(users)),
        Err(error) => respond(&error, &LazyUsersEnvelope::failure(&error)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{
        FixtureUserRecordCursor, LazyUsersQuery, MockLazyUsersQuery, UserRecordCursorError,
    };
    use crate::domain::{
        INCOMPLETE_RECORD_MESSAGE, LazyUsersService, QUERY_FAILED_MESSAGE, RecordSetName,
        TRACE_ID_HEADER, UNAVAILABLE_MESSAGE, UserRecord,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn over(cursor: FixtureUserRecordCursor) -> Arc<dyn LazyUsersQuery> {
        Arc::new(LazyUsersService::new(
            Arc::new(cursor),
            RecordSetName::default(),
        ))
    }

    async fn call(query: Arc<dyn LazyUsersQuery>) -> (StatusCode, String) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(query)))
                .service(list_lazy_users),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/lazy-users").to_request();
        let res = actix_test::call_service(&app, req).await;
        let status = res.status();
        let body = actix_test::read_body(res).await;
        (
            status,
            String::from_utf8(body.to_vec()).expect("utf8 body"),
        )
    }

    async fn failure_body(cursor: FixtureUserRecordCursor) -> (StatusCode, Value) {
        let (status, body) = call(over(cursor)).await;
        (status, serde_json::from_str(&body).expect("json body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn success_envelope_keeps_key_order() {
        let (status, body) = call(over(FixtureUserRecordCursor::demo())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            concat!(
                r#"{"status":true,"message":"Lazy Collection Example","data":["#,
                r#"{"id":1,"name":"ANN","email":"a@x.com"},"#,
                r#"{"id":2,"name":"BO","email":"b@x.com"}]}"#,
            )
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_listing_has_empty_data() {
        let (status, body) = call(over(FixtureUserRecordCursor::default())).await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(
            body,
            json!({ "status": true, "message": LAZY_USERS_MESSAGE, "data": [] })
        );
    }

    #[rstest]
    #[case(
        UserRecordCursorError::connection("server closed the connection unexpectedly"),
        StatusCode::SERVICE_UNAVAILABLE,
        UNAVAILABLE_MESSAGE
    )]
    #[case(
        UserRecordCursorError::query("relation \"lazy_user_records\" does not exist"),
        StatusCode::INTERNAL_SERVER_ERROR,
        QUERY_FAILED_MESSAGE
    )]
    #[actix_web::test]
    async fn source_failures_render_an_empty_envelope(
        #[case] failure: UserRecordCursorError,
        #[case] expected_status: StatusCode,
        #[case] expected_message: &str,
    ) {
        let (status, body) = failure_body(FixtureUserRecordCursor::scripted(vec![
            Ok(UserRecord::new(1, Some("ann".into()), Some("a@x.com".into()))),
            Err(failure),
        ]))
        .await;

        assert_eq!(status, expected_status);
        assert_eq!(
            body,
            json!({ "status": false, "message": expected_message, "data": [] })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_failure_kinds_have_distinct_messages() {
        let (query_status, query_body) =
            failure_body(FixtureUserRecordCursor::scripted(vec![Err(
                UserRecordCursorError::query("syntax error at or near \"FROM\""),
            )]))
            .await;
        let (malformed_status, malformed_body) = failure_body(FixtureUserRecordCursor::new([
            UserRecord::new(1, None, Some("a@x.com".into())),
        ]))
        .await;

        assert_eq!(query_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(malformed_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(query_body["message"], QUERY_FAILED_MESSAGE);
        assert_eq!(malformed_body["message"], INCOMPLETE_RECORD_MESSAGE);
        assert_ne!(query_body["message"], malformed_body["message"]);
    }

    #[rstest]
    #[actix_web::test]
    async fn failure_echoes_the_error_trace_id() {
        let trace_id = "00000000-0000-0000-0000-000000000000";
        let mut query = MockLazyUsersQuery::new();
        query
            .expect_list_lazy_users()
            .times(1)
            .return_once(move || Err(Error::internal(QUERY_FAILED_MESSAGE).with_trace_id(trace_id)));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(Arc::new(query))))
                .service(list_lazy_users),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/lazy-users").to_request();

        let res = actix_test::call_service(&app, req).await;

        assert_eq!(
            res.headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some(trace_id)
        );
    }
}
