//! Lecture update handler (multipart).

use axum::{
    Extension,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
};
use db::{models::lecture::Model as LectureModel, storage::StorageError};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, bad_request, internal_error, not_found, ok};
use crate::routes::lectures::common::{LectureForm, LectureResponse};

/// PUT /api/lectures/{lecture_id}
///
/// Overwrites a lecture's course and topic, and replaces its presentation
/// when a file is sent. The previous file is removed from storage. If the
/// file cannot be stored, the lecture is left as it was.
///
/// ### Multipart Fields
/// - `course` (required): id of a course the caller belongs to
/// - `topic` (required): 1 to 255 characters
/// - `presentation` (optional file): non-empty, with a usable file name
///
/// ### Example cURL
/// ```bash
/// curl -X PUT "http://localhost:3000/api/lectures/7" \
///   -H "Authorization: Bearer <JWT>" \
///   -F course=1 -F topic="Ownership" -F presentation=@ownership.pdf
/// ```
///
/// ### Responses
/// - `200 OK` with the updated lecture
/// - `400 Bad Request` on invalid fields or a malformed body
/// - `404 Not Found` if the lecture is outside the caller's courses
/// - `500 Internal Server Error` if the file cannot be stored
pub async fn edit_lecture(
    State(app_state): State<AppState>,
    Path(lecture_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult {
    let db = app_state.db();

    LectureModel::find_one_for_user(db, user.user_id(), lecture_id)
        .await
        .map_err(|e| internal_error("Failed to fetch lecture", e))?
        .ok_or_else(|| not_found("Lecture not found"))?;

    let multipart = multipart.map_err(|rejection| bad_request(rejection.body_text()))?;
    let form = LectureForm::read(multipart)
        .await
        .map_err(|e| bad_request(e.body_text()))?;

    let (req, mut errors, presentation) = form.into_parts();
    if !errors.has("course") {
        req.check_course(db, user.user_id(), &mut errors)
            .await
            .map_err(|e| internal_error("Failed to check lecture course", e))?;
    }
    errors.check()?;

    let upload = presentation
        .as_ref()
        .map(|file| (file.filename.as_str(), file.bytes.as_slice()));
    let lecture = LectureModel::edit(db, lecture_id, req.course, &req.topic, upload)
        .await
        .map_err(|e| match e {
            StorageError::InvalidName(name) => {
                bad_request(format!("The submitted file name {name:?} is not valid."))
            }
            other => internal_error("Failed to update lecture", other),
        })?;

    if let Some(file) = &presentation {
        tracing::info!(lecture_id, file = %file.filename, "Presentation stored");
    }

    tracing::info!(lecture_id, user = user.user_id(), "Lecture updated");
    Ok(ok(LectureResponse::from(lecture), "Lecture updated successfully"))
}
