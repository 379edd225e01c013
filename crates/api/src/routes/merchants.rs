use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::merchants;
use crate::state::AppState;

/// Merchant-group routes mounted at `/merchants`.
///
/// ```text
/// POST   /onboarding        -> save_onboarding
/// ```
pub fn merchant_router() -> Router<AppState> {
    Router::new().route("/onboarding", post(merchants::save_onboarding))
}

/// System-group routes mounted at `/merchants`.
///
/// ```text
/// PATCH  /{id}/data                     -> change_merchant_data
/// ```
pub fn system_router() -> Router<AppState> {
    Router::new().route("/{id}/data", patch(merchants::change_merchant_data))
}
