pub mod health;
pub mod merchants;
pub mod projects;

use axum::routing::{get, put};
use axum::{Extension, Router};
use paygate_core::inject::Injector;

use crate::handlers;
use crate::state::AppState;

/// Build the merchant dashboard route tree, mounted at `/admin/api/v1`.
///
/// The owning merchant of every bound request comes from the caller's token.
///
/// ```text
/// /projects                                 list, create
/// /projects/{project_id}                    get, patch
///
/// /merchants/onboarding                     save onboarding step (POST)
///
/// /orders                                   list (scoped to caller)
///
/// /user/profile                             update (PUT)
/// ```
pub fn merchant_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/merchants", merchants::merchant_router())
        .route("/orders", get(handlers::orders::list_orders))
        .route("/user/profile", put(handlers::profile::update_profile))
        .layer(Extension(Injector::Merchant))
}

/// Build the internal route tree, mounted at `/system/api/v1`.
///
/// The owning merchant of every bound request comes from the route.
///
/// ```text
/// /merchants/{id}/data                      patch agreement data
/// /notifications/{merchant_id}              list
/// ```
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .nest("/merchants", merchants::system_router())
        .route(
            "/notifications/{merchant_id}",
            get(handlers::merchants::list_notifications),
        )
        .layer(Extension(Injector::System))
}
