use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use db::models::task_control::Model as TaskControlModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, created, internal_error, parse_json};
use crate::routes::task_controls::common::{TaskControlRequest, TaskControlResponse};

/// POST /api/task-controls
///
/// Records a submission. Open to any caller, authenticated or not; a token
/// that is sent must still be valid.
///
/// ### Request Body
/// ```json
/// { "task": 12, "student": 4, "solution": "fn main() { .. }", "mark": null }
/// ```
///
/// ### Validation Rules
/// * `task`, `student`: must exist
/// * `solution`: optional, at most 10000 characters
/// * `mark`: optional, 0 to 100
///
/// ### Responses
/// - `201 Created` with `Location: /api/task-controls/{id}`
/// - `400 Bad Request`
pub async fn create_task_control(
    State(app_state): State<AppState>,
    user: Option<AuthUser>,
    payload: Result<Json<TaskControlRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();
    let req = parse_json(payload)?;

    req.check(db)
        .await
        .map_err(|e| internal_error("Failed to check task control references", e))?
        .check()?;

    let control = TaskControlModel::create(db, req.fields())
        .await
        .map_err(|e| internal_error("Failed to create task control", e))?;

    tracing::info!(
        task_control_id = control.id,
        task_id = control.task_id,
        user = user.map(|u| u.user_id()).unwrap_or(0),
        "Task control created"
    );

    Ok(created(
        format!("/api/task-controls/{}", control.id),
        TaskControlResponse::from(control),
        "Task control created successfully",
    ))
}
