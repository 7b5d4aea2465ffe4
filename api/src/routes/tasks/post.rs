use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use db::models::lecture_task::Model as TaskModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, created, internal_error, parse_json};
use crate::routes::tasks::common::{TaskRequest, TaskResponse};

/// POST /api/tasks
///
/// ### Request Body
/// ```json
/// { "lecture": 7, "title": "Fix the borrow checker errors", "description": "See week 2 slides" }
/// ```
///
/// ### Responses
/// - `201 Created` with `Location: /api/tasks/{id}`
/// - `400 Bad Request` (validation failure, or `lecture` outside the caller's courses)
/// ```json
/// {
///   "success": false,
///   "data": { "lecture": ["Invalid pk \"42\" - object does not exist."] },
///   "message": "Invalid pk \"42\" - object does not exist."
/// }
/// ```
pub async fn create_task(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();
    let req = parse_json(payload)?;

    req.check(db, user.user_id())
        .await
        .map_err(|e| internal_error("Failed to check task lecture", e))?
        .check()?;

    let task = TaskModel::create(db, req.lecture, &req.title, req.description.as_deref())
        .await
        .map_err(|e| internal_error("Failed to create task", e))?;

    tracing::info!(task_id = task.id, lecture_id = req.lecture, "Task created");

    Ok(created(
        format!("/api/tasks/{}", task.id),
        TaskResponse::from(task),
        "Task created successfully",
    ))
}
