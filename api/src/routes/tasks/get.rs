use axum::{extract::State, response::IntoResponse};
use db::models::lecture_task::Model as TaskModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{internal_error, ok};
use crate::routes::tasks::common::TaskResponse;

/// GET /api/tasks
///
/// Lists tasks of lectures in the caller's courses, ordered by id. Anonymous
/// callers get an empty list.
pub async fn get_tasks(
    State(app_state): State<AppState>,
    user: Option<AuthUser>,
) -> impl IntoResponse {
    let Some(user) = user else {
        return ok(Vec::<TaskResponse>::new(), "Tasks retrieved successfully");
    };

    match TaskModel::find_for_user(app_state.db(), user.user_id()).await {
        Ok(tasks) => ok(
            tasks.into_iter().map(TaskResponse::from).collect::<Vec<_>>(),
            "Tasks retrieved successfully",
        ),
        Err(e) => internal_error("Failed to list tasks", e),
    }
}
