use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list_projects
/// POST   /                  -> create_project
/// GET    /{project_id}      -> get_project
/// PATCH  /{project_id}      -> update_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects).post(projects::create_project))
        .route(
            "/{project_id}",
            get(projects::get_project).patch(projects::update_project),
        )
}
