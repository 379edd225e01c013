use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use paygate_core::merchant::ListOrdersRequest;

use crate::binding::RequestScope;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/api/v1/orders
///
/// Always scoped to the caller's merchant, whatever the query asks for.
pub async fn list_orders(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let req: ListOrdersRequest = scope.bind().await?;
    let listing = state.billing.find_orders(&req).await?;
    Ok(Json(DataResponse { data: listing }))
}
