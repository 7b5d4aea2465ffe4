//! Course deletion handler.

use axum::{
    Extension,
    extract::{Path, State},
};
use db::{models::course::Model as CourseModel, storage};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, no_content, not_found};

/// DELETE /api/courses/{course_id}
///
/// Deletes a course together with its lectures, tasks, task controls,
/// comments and memberships. Presentation files of its lectures are removed
/// from storage afterwards; a failed file removal is logged and does not
/// fail the request.
///
/// ### Responses
/// - `204 No Content`
/// - `403 Forbidden` for non-lecturers
/// - `404 Not Found` if the caller is not a member
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult {
    let db = app_state.db();

    CourseModel::find_one_for_user(db, user.user_id(), course_id)
        .await
        .map_err(|e| internal_error("Failed to fetch course", e))?
        .ok_or_else(|| not_found("Course not found"))?;

    let lecture_ids = CourseModel::lecture_ids(db, course_id)
        .await
        .map_err(|e| internal_error("Failed to list course lectures", e))?;

    CourseModel::delete(db, course_id)
        .await
        .map_err(|e| internal_error("Failed to delete course", e))?;

    for lecture_id in lecture_ids {
        if let Err(e) = storage::remove_lecture_dir(lecture_id) {
            tracing::warn!(course_id, lecture_id, error = %e, "Failed to remove lecture files");
        }
    }

    tracing::info!(course_id, user = user.user_id(), "Course deleted");
    Ok(no_content())
}
