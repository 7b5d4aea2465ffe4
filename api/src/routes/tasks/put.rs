use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};
use db::models::lecture_task::Model as TaskModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, not_found, ok, parse_json};
use crate::routes::tasks::common::{TaskRequest, TaskResponse};

/// PUT /api/tasks/{task_id}
///
/// Overwrites a task. The target lecture must also be in the caller's
/// courses, so a task can be moved between the caller's lectures only.
///
/// ### Responses
/// - `200 OK` with the updated task
/// - `400 Bad Request`
/// - `404 Not Found`
pub async fn edit_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();

    TaskModel::find_one_for_user(db, user.user_id(), task_id)
        .await
        .map_err(|e| internal_error("Failed to fetch task", e))?
        .ok_or_else(|| not_found("Task not found"))?;

    let req = parse_json(payload)?;
    req.check(db, user.user_id())
        .await
        .map_err(|e| internal_error("Failed to check task lecture", e))?
        .check()?;

    let task = TaskModel::edit(db, task_id, req.lecture, &req.title, req.description.as_deref())
        .await
        .map_err(|e| internal_error("Failed to update task", e))?;

    tracing::info!(task_id, user = user.user_id(), "Task updated");
    Ok(ok(TaskResponse::from(task), "Task updated successfully"))
}
