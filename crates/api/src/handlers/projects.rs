//! Handlers for merchant projects.
//!
//! All routes are in the merchant group: the owning merchant always comes
//! from the caller's token.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use paygate_core::catalog;
use paygate_core::error::CoreError;
use paygate_core::project::{GetProjectRequest, ListProjectsRequest, Project, ProjectPatch, PROJECT_ID_PARAM};

use crate::billing::ProjectRecords;
use crate::binding::RequestScope;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let req: ListProjectsRequest = scope.bind().await?;
    let listing = state.billing.list_projects(&req).await?;
    Ok(Json(DataResponse { data: listing }))
}

/// GET /admin/api/v1/projects/{project_id}
pub async fn get_project(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let project_id = scope
        .path()
        .object_id(PROJECT_ID_PARAM, catalog::INCORRECT_PROJECT_ID)?;
    let req: GetProjectRequest = scope.bind().await?;
    let project = state.billing.get_project(project_id).await?;
    ensure_owner(&project, &req.merchant_id)?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /admin/api/v1/projects
///
/// Any client-supplied `id` is dropped so a create can never overwrite an
/// existing project.
pub async fn create_project(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let mut project: Project = scope.bind().await?;
    project.id.clear();

    let created = state.billing.change_project(&project).await?;

    tracing::info!(
        project_id = %created.id,
        merchant_id = %created.merchant_id,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PATCH /admin/api/v1/projects/{project_id}
pub async fn update_project(
    State(state): State<AppState>,
    scope: RequestScope,
) -> AppResult<impl IntoResponse> {
    let project = scope
        .bind_patch::<ProjectPatch, _>(
            &ProjectRecords(state.billing.as_ref()),
            PROJECT_ID_PARAM,
            catalog::INCORRECT_PROJECT_ID,
        )
        .await?;
    ensure_owner(&project, &scope.identity().merchant_id)?;

    let saved = state.billing.change_project(&project).await?;

    tracing::info!(project_id = %saved.id, "Project updated");

    Ok(Json(DataResponse { data: saved }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ensure_owner(project: &Project, merchant_id: &str) -> Result<(), CoreError> {
    if project.merchant_id == merchant_id {
        Ok(())
    } else {
        tracing::warn!(
            project_id = %project.id,
            owner = %project.merchant_id,
            caller = %merchant_id,
            "Project belongs to another merchant",
        );
        Err(CoreError::Rejected(catalog::INCORRECT_MERCHANT_ID))
    }
}
