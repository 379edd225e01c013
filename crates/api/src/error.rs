use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paygate_core::catalog::ErrorMessage;
use paygate_core::error::CoreError;

use crate::billing::BillingError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for binding-pipeline failures and adds the billing
/// backend's own business errors, which are relayed without rewriting.
/// Every variant renders as a flat `{code, message, details}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A binding-pipeline error from `paygate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The billing backend rejected a write or lookup.
    #[error("Billing rejected the request ({status}): {}", error.message)]
    Backend { status: u16, error: ErrorMessage },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::Rejected { status, error } => AppError::Backend { status, error },
            BillingError::Transport(msg) => AppError::Core(CoreError::Upstream(msg)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => {
                let status = match core {
                    CoreError::Decode(msg) => {
                        tracing::debug!(error = %msg, "Request decode failed");
                        StatusCode::BAD_REQUEST
                    }
                    CoreError::Internal(msg) => {
                        tracing::error!(error = %msg, "Internal core error");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    CoreError::Upstream(msg) => {
                        tracing::error!(error = %msg, "Billing backend unavailable");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                    CoreError::CanonicalFetchFailed { status, .. } => backend_status(*status),
                    CoreError::IdentityMissing(_)
                    | CoreError::FieldTypeMismatch { .. }
                    | CoreError::Validation(_)
                    | CoreError::Rejected(_) => StatusCode::BAD_REQUEST,
                };
                (status, core.to_message())
            }

            // --- Billing business errors ---
            AppError::Backend { status, error } => (backend_status(*status), error.clone()),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// The backend's status code, or 500 when it is not a valid HTTP status.
fn backend_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
