//! The facade's HTTP surface: route groups plus the middleware every
//! request passes through.
//!
//! `main.rs` and `tests/common/mod.rs` both go through [`build_app_router`],
//! so integration tests see the production stack.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request correlation id, set when absent and
/// echoed back on the response.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Methods the facade serves. Preflights for anything else are refused.
const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::PATCH];

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Assemble the application: health at the root, the merchant dashboard
/// under `/admin/api/v1` and internal callers under `/system/api/v1`.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    with_middleware(api_routes(), config).with_state(state)
}

/// Route groups only. The groups differ in where the owning merchant comes
/// from: the bearer token for the dashboard, the route for system callers.
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(routes::health::router())
        .nest("/admin/api/v1", routes::merchant_routes())
        .nest("/system/api/v1", routes::system_routes())
}

/// Wrap `router` in the request pipeline. Listed outermost first, a request
/// passes CORS, gets its request id, is traced, has the id copied onto the
/// response, runs under the timeout and finally under panic recovery.
fn with_middleware(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(trace)
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(cors_layer(config))
}

/// CORS for the configured dashboard origins. Credentials are allowed so
/// the browser forwards the bearer token.
///
/// Panics at startup if an origin does not parse as a header value.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
