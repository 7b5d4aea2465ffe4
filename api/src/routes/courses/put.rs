use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, not_found, ok, parse_json};
use crate::routes::courses::common::{CourseRequest, CourseResponse};

/// PUT /api/courses/{course_id}
///
/// Overwrites a course's name and description. When `users` is given the
/// member list is replaced by it, and the caller stays a member.
///
/// Courses the caller is not a member of are reported as missing before the
/// body is looked at.
///
/// ### Responses
/// - `200 OK` with the updated course
/// - `400 Bad Request` on validation failure or malformed JSON
/// - `403 Forbidden` for non-lecturers
/// - `404 Not Found`
pub async fn edit_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();

    CourseModel::find_one_for_user(db, user.user_id(), course_id)
        .await
        .map_err(|e| internal_error("Failed to fetch course", e))?
        .ok_or_else(|| not_found("Course not found"))?;

    let req = parse_json(payload)?;
    req.check(db)
        .await
        .map_err(|e| internal_error("Failed to validate course members", e))?
        .check()?;

    let members = req.members_with(user.user_id());
    let course = CourseModel::edit(
        db,
        course_id,
        &req.name,
        req.description.as_deref(),
        members.as_deref(),
    )
    .await
    .map_err(|e| internal_error("Failed to update course", e))?;

    let users = course
        .member_ids(db)
        .await
        .map_err(|e| internal_error("Failed to load course members", e))?;

    tracing::info!(course_id, user = user.user_id(), "Course updated");

    Ok(ok(
        CourseResponse::new(course, users),
        "Course updated successfully",
    ))
}
