//! Handlers for merchant data.
//!
//! Agreement data and notifications are served to internal callers (system
//! group, merchant taken from the route); onboarding is served to the
//! merchant dashboard (merchant taken from the token).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use paygate_core::catalog;
use paygate_core::merchant::{ListNotificationsRequest, MerchantDataPatch, MERCHANT_PATH_ID_PARAM};
use paygate_core::onboarding::OnboardingRequest;

use crate::billing::MerchantDataRecords;
use crate::binding::RequestScope;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// PATCH /system/api/v1/merchants/{id}/data
pub async fn change_merchant_data(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let req = scope
        .bind_patch::<MerchantDataPatch, _>(
            &MerchantDataRecords(state.billing.as_ref()),
            MERCHANT_PATH_ID_PARAM,
            catalog::INCORRECT_MERCHANT_ID,
        )
        .await?;

    let merchant = state.billing.change_merchant_data(&req).await?;

    tracing::info!(
        merchant_id = %req.merchant_id,
        agreement_type = req.agreement_type,
        "Merchant agreement data changed",
    );

    Ok(Json(DataResponse { data: merchant }))
}

/// GET /system/api/v1/notifications/{merchant_id}
pub async fn list_notifications(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let req: ListNotificationsRequest = scope.bind().await?;
    let listing = state.billing.list_notifications(&req).await?;
    Ok(Json(DataResponse { data: listing }))
}

/// POST /admin/api/v1/merchants/onboarding
pub async fn save_onboarding(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let req: OnboardingRequest = scope.bind().await?;
    let merchant = state.billing.change_merchant(&req).await?;

    tracing::info!(merchant_id = %merchant.id, "Onboarding step saved");

    Ok(Json(DataResponse { data: merchant }))
}
