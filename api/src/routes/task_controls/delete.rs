use axum::extract::{Path, State};
use db::models::task_control::Model as TaskControlModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, no_content, not_found};

/// DELETE /api/task-controls/{task_control_id}
///
/// Comments on the control are deleted with it.
///
/// ### Responses
/// - `204 No Content`
/// - `404 Not Found` if the control is outside the caller's courses
pub async fn delete_task_control(
    State(app_state): State<AppState>,
    Path(task_control_id): Path<i64>,
    user: Option<AuthUser>,
) -> ApiResult {
    let db = app_state.db();
    let user = user.ok_or_else(|| not_found("Task control not found"))?;

    TaskControlModel::find_one_for_user(db, user.user_id(), task_control_id)
        .await
        .map_err(|e| internal_error("Failed to fetch task control", e))?
        .ok_or_else(|| not_found("Task control not found"))?;

    TaskControlModel::delete(db, task_control_id)
        .await
        .map_err(|e| internal_error("Failed to delete task control", e))?;

    tracing::info!(task_control_id, user = user.user_id(), "Task control deleted");
    Ok(no_content())
}
