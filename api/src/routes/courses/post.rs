//! Course creation route.
//!
//! Provides `POST /api/courses`. Only lecturers reach this handler; the
//! creator is always added as a member of the new course.

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{course::Model as CourseModel, user::Model as UserModel};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{ApiResult, created, internal_error, parse_json};
use crate::routes::courses::common::{CourseRequest, CourseResponse};

/// POST /api/courses
///
/// ### Request Body
/// ```json
/// {
///   "name": "Systems Programming",
///   "description": "Ownership, lifetimes and unsafe",
///   "users": [4]
/// }
/// ```
///
/// ### Validation Rules
/// * `name`: required, 1 to 255 characters
/// * `description`: optional, at most 2000 characters
/// * `users`: optional, every id must be an existing user
///
/// ### Responses
/// - `201 Created` with `Location: /api/courses/{id}`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "name": "Systems Programming",
///     "description": "Ownership, lifetimes and unsafe",
///     "users": [1, 4],
///     "created_at": "2026-02-01T08:00:00+00:00",
///     "updated_at": "2026-02-01T08:00:00+00:00"
///   },
///   "message": "Course created successfully"
/// }
/// ```
/// - `400 Bad Request` (validation failure)
/// ```json
/// {
///   "success": false,
///   "data": { "users": ["Invalid pk \"99\" - object does not exist."] },
///   "message": "Invalid pk \"99\" - object does not exist."
/// }
/// ```
/// - `401 Unauthorized` if the token's user no longer exists
/// - `403 Forbidden` for non-lecturers
pub async fn create_course(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();
    let req = parse_json(payload)?;

    req.check(db)
        .await
        .map_err(|e| internal_error("Failed to validate course members", e))?
        .check()?;

    let creator = UserModel::get_by_id(db, user.user_id())
        .await
        .map_err(|e| internal_error("Failed to load requesting user", e))?;
    if creator.is_none() {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("User not found")),
        )
            .into_response());
    }

    let members = req
        .members_with(user.user_id())
        .unwrap_or_else(|| vec![user.user_id()]);

    let course = CourseModel::create(db, &req.name, req.description.as_deref(), &members)
        .await
        .map_err(|e| internal_error("Failed to create course", e))?;

    let users = course
        .member_ids(db)
        .await
        .map_err(|e| internal_error("Failed to load course members", e))?;

    tracing::info!(course_id = course.id, user = user.user_id(), "Course created");

    let location = format!("/api/courses/{}", course.id);
    Ok(created(
        location,
        CourseResponse::new(course, users),
        "Course created successfully",
    ))
}
