use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::{course::Model as CourseModel, course_user::Model as CourseUserModel};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{internal_error, not_found, ok};
use crate::routes::courses::common::CourseResponse;

/// GET /api/courses
///
/// Lists the courses the caller is a member of, ordered by id. Each entry
/// carries its member ids in ascending order.
///
/// Anonymous callers get an empty list.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "name": "Systems Programming",
///       "description": "Ownership, lifetimes and unsafe",
///       "users": [1, 4],
///       "created_at": "2026-02-01T08:00:00+00:00",
///       "updated_at": "2026-02-01T08:00:00+00:00"
///     }
///   ],
///   "message": "Courses retrieved successfully"
/// }
/// ```
/// - `401 Unauthorized` if a token is present but invalid
/// - `500 Internal Server Error`
pub async fn get_courses(
    State(app_state): State<AppState>,
    user: Option<AuthUser>,
) -> impl IntoResponse {
    let Some(user) = user else {
        return ok(Vec::<CourseResponse>::new(), "Courses retrieved successfully");
    };
    let db = app_state.db();

    let courses = match CourseModel::find_for_user(db, user.user_id()).await {
        Ok(courses) => courses,
        Err(e) => return internal_error("Failed to list courses", e),
    };

    let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
    let mut members = match CourseUserModel::members_by_course(db, &ids).await {
        Ok(members) => members,
        Err(e) => return internal_error("Failed to load course members", e),
    };

    let data: Vec<CourseResponse> = courses
        .into_iter()
        .map(|course| {
            let users = members.remove(&course.id).unwrap_or_default();
            CourseResponse::new(course, users)
        })
        .collect();

    ok(data, "Courses retrieved successfully")
}

/// GET /api/courses/{course_id}
///
/// Fetches one course. Courses the caller is not a member of are reported as
/// missing.
///
/// ### Responses
/// - `200 OK` with the course
/// - `404 Not Found`
/// ```json
/// { "success": false, "data": null, "message": "Course not found" }
/// ```
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    user: Option<AuthUser>,
) -> impl IntoResponse {
    let Some(user) = user else {
        return not_found("Course not found");
    };
    let db = app_state.db();

    let course = match CourseModel::find_one_for_user(db, user.user_id(), course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return not_found("Course not found"),
        Err(e) => return internal_error("Failed to fetch course", e),
    };

    match course.member_ids(db).await {
        Ok(users) => ok(
            CourseResponse::new(course, users),
            "Course retrieved successfully",
        ),
        Err(e) => internal_error("Failed to load course members", e),
    }
}
