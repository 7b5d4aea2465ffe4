use axum::{extract::State, response::IntoResponse};
use db::models::lecture::Model as LectureModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{internal_error, ok};
use crate::routes::lectures::common::LectureResponse;

/// GET /api/lectures
///
/// Lists lectures of every course the caller is a member of, ordered by id.
/// Anonymous callers get an empty list.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 7,
///       "course": 1,
///       "topic": "Ownership",
///       "presentation": "lectures/lecture_7/ownership.pdf",
///       "created_at": "2026-02-03T10:00:00+00:00",
///       "updated_at": "2026-02-03T10:30:00+00:00"
///     }
///   ],
///   "message": "Lectures retrieved successfully"
/// }
/// ```
pub async fn get_lectures(
    State(app_state): State<AppState>,
    user: Option<AuthUser>,
) -> impl IntoResponse {
    let Some(user) = user else {
        return ok(Vec::<LectureResponse>::new(), "Lectures retrieved successfully");
    };

    match LectureModel::find_for_user(app_state.db(), user.user_id()).await {
        Ok(lectures) => ok(
            lectures
                .into_iter()
                .map(LectureResponse::from)
                .collect::<Vec<_>>(),
            "Lectures retrieved successfully",
        ),
        Err(e) => internal_error("Failed to list lectures", e),
    }
}
