//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::LazyUsersService;
use backend::domain::ports::{FixtureUserRecordCursor, LazyUsersQuery};
use backend::inbound::http::error::not_found;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::lazy_users::list_lazy_users;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::DieselUserRecordCursor;
use backend::trace_request;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the lazy users service, streaming from PostgreSQL when a pool is
/// configured and from the demonstration records otherwise.
fn build_lazy_users(config: &ServerConfig) -> Arc<dyn LazyUsersQuery> {
    let record_set = config.record_set.clone();
    match &config.db_pool {
        Some(pool) => {
            info!(%record_set, "serving lazy users from PostgreSQL");
            Arc::new(LazyUsersService::new(
                Arc::new(DieselUserRecordCursor::new(pool.clone())),
                record_set,
            ))
        }
        None => {
            info!(%record_set, "no database configured; serving demonstration records");
            Arc::new(LazyUsersService::new(
                Arc::new(FixtureUserRecordCursor::demo()),
                record_set,
            ))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(from_fn(trace_request))
        .service(list_lazy_users)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(not_found))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The returned [`Server`] must be awaited to drive the listener. Readiness is
/// flagged once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(build_lazy_users(&config)));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "lazy users server listening");
    health_state.mark_ready();
    Ok(server)
}
