use axum::{extract::State, response::IntoResponse};
use db::models::task_control::Model as TaskControlModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{internal_error, ok};
use crate::routes::task_controls::common::TaskControlResponse;

/// GET /api/task-controls
///
/// Lists task controls of tasks in the caller's courses. Anonymous callers
/// get an empty list.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 3,
///       "task": 12,
///       "student": 4,
///       "solution": "fn main() { .. }",
///       "mark": 85,
///       "created_at": "2026-02-10T09:00:00+00:00",
///       "updated_at": "2026-02-11T14:00:00+00:00"
///     }
///   ],
///   "message": "Task controls retrieved successfully"
/// }
/// ```
pub async fn get_task_controls(
    State(app_state): State<AppState>,
    user: Option<AuthUser>,
) -> impl IntoResponse {
    let Some(user) = user else {
        return ok(
            Vec::<TaskControlResponse>::new(),
            "Task controls retrieved successfully",
        );
    };

    match TaskControlModel::find_for_user(app_state.db(), user.user_id()).await {
        Ok(controls) => ok(
            controls
                .into_iter()
                .map(TaskControlResponse::from)
                .collect::<Vec<_>>(),
            "Task controls retrieved successfully",
        ),
        Err(e) => internal_error("Failed to list task controls", e),
    }
}
