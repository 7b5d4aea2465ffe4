use axum::{
    Extension,
    extract::{Path, State},
};
use db::models::lecture_task::Model as TaskModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, no_content, not_found};

/// DELETE /api/tasks/{task_id}
///
/// Task controls and their comments are deleted with the task.
pub async fn delete_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult {
    let db = app_state.db();

    TaskModel::find_one_for_user(db, user.user_id(), task_id)
        .await
        .map_err(|e| internal_error("Failed to fetch task", e))?
        .ok_or_else(|| not_found("Task not found"))?;

    TaskModel::delete(db, task_id)
        .await
        .map_err(|e| internal_error("Failed to delete task", e))?;

    tracing::info!(task_id, user = user.user_id(), "Task deleted");
    Ok(no_content())
}
