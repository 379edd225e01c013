use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use paygate_core::profile::UserProfileRequest;

use crate::binding::RequestScope;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /admin/api/v1/user/profile
pub async fn update_profile(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let mut req: UserProfileRequest = scope.bind().await?;
    req.user_id = scope.identity().id.clone();

    let profile = state.billing.update_user_profile(&req).await?;
    Ok(Json(DataResponse { data: profile }))
}
