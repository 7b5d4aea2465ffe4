use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use db::models::lecture::Model as LectureModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, FieldErrors, created, internal_error, parse_json};
use crate::routes::lectures::common::{LectureRequest, LectureResponse};

/// POST /api/lectures
///
/// Creates a lecture in one of the caller's courses. Presentations are
/// uploaded afterwards through `PUT /api/lectures/{lecture_id}`.
///
/// ### Request Body
/// ```json
/// { "course": 1, "topic": "Ownership" }
/// ```
///
/// ### Responses
/// - `201 Created` with `Location: /api/lectures/{id}`
/// - `400 Bad Request` when `topic` is blank or too long, or `course` is not
///   a course the caller belongs to
/// - `401 Unauthorized` / `403 Forbidden` from the lecturer guard
pub async fn create_lecture(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<LectureRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();
    let req = parse_json(payload)?;

    let mut errors = FieldErrors::of(&req);
    req.check_course(db, user.user_id(), &mut errors)
        .await
        .map_err(|e| internal_error("Failed to check lecture course", e))?;
    errors.check()?;

    let lecture = LectureModel::create(db, req.course, &req.topic)
        .await
        .map_err(|e| internal_error("Failed to create lecture", e))?;

    tracing::info!(lecture_id = lecture.id, course_id = req.course, "Lecture created");

    Ok(created(
        format!("/api/lectures/{}", lecture.id),
        LectureResponse::from(lecture),
        "Lecture created successfully",
    ))
}
