use axum::{
    Extension,
    extract::{Path, State},
};
use db::{models::lecture::Model as LectureModel, storage};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, no_content, not_found};

/// DELETE /api/lectures/{lecture_id}
///
/// Deletes the lecture, its tasks (and everything below them), and its
/// stored presentation.
///
/// ### Responses
/// - `204 No Content`
/// - `404 Not Found` if the lecture is outside the caller's courses
pub async fn delete_lecture(
    State(app_state): State<AppState>,
    Path(lecture_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult {
    let db = app_state.db();

    LectureModel::find_one_for_user(db, user.user_id(), lecture_id)
        .await
        .map_err(|e| internal_error("Failed to fetch lecture", e))?
        .ok_or_else(|| not_found("Lecture not found"))?;

    LectureModel::delete(db, lecture_id)
        .await
        .map_err(|e| internal_error("Failed to delete lecture", e))?;

    if let Err(e) = storage::remove_lecture_dir(lecture_id) {
        tracing::warn!(lecture_id, error = %e, "Failed to remove lecture files");
    }

    tracing::info!(lecture_id, user = user.user_id(), "Lecture deleted");
    Ok(no_content())
}
