use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use db::models::task_control::Model as TaskControlModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, not_found, ok, parse_json};
use crate::routes::task_controls::common::{TaskControlRequest, TaskControlResponse};

/// PUT /api/task-controls/{task_control_id}
///
/// Overwrites a task control, typically to set its mark. Only controls of
/// tasks in the caller's courses can be edited; anything else, including
/// any control for an anonymous caller, is `404 Not Found`.
pub async fn edit_task_control(
    State(app_state): State<AppState>,
    Path(task_control_id): Path<i64>,
    user: Option<AuthUser>,
    payload: Result<Json<TaskControlRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();
    let user = user.ok_or_else(|| not_found("Task control not found"))?;

    TaskControlModel::find_one_for_user(db, user.user_id(), task_control_id)
        .await
        .map_err(|e| internal_error("Failed to fetch task control", e))?
        .ok_or_else(|| not_found("Task control not found"))?;

    let req = parse_json(payload)?;
    req.check(db)
        .await
        .map_err(|e| internal_error("Failed to check task control references", e))?
        .check()?;

    let control = TaskControlModel::edit(db, task_control_id, req.fields())
        .await
        .map_err(|e| internal_error("Failed to update task control", e))?;

    tracing::info!(task_control_id, user = user.user_id(), "Task control updated");
    Ok(ok(
        TaskControlResponse::from(control),
        "Task control updated successfully",
    ))
}
