//! # Courses Routes Module
//!
//! Defines and wires up routes for the `/api/courses` endpoint group.
//!
//! ## Structure
//! - `get.rs` — list the caller's courses, fetch one course
//! - `post.rs` — create a course (the creator becomes a member)
//! - `put.rs` — edit a course and optionally its member list
//! - `delete.rs` — delete a course with everything below it
//! - `common.rs` — request and response models

use crate::auth::guards::allow_lecturer_or_get;
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_course;
use get::{get_course, get_courses};
use post::create_course;
use put::edit_course;

/// Builds the `/courses` route group.
///
/// Routes:
/// - `GET    /courses`              → courses the caller is a member of
/// - `POST   /courses`              → create a course (lecturer only)
/// - `GET    /courses/{course_id}`  → one course, if the caller is a member
/// - `PUT    /courses/{course_id}`  → edit a course (lecturer only)
/// - `DELETE /courses/{course_id}`  → delete a course (lecturer only)
///
/// Write routes carry `allow_lecturer_or_get`.
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_courses))
        .route("/", post(create_course).route_layer(from_fn(allow_lecturer_or_get)))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}", put(edit_course).route_layer(from_fn(allow_lecturer_or_get)))
        .route(
            "/{course_id}",
            delete(delete_course).route_layer(from_fn(allow_lecturer_or_get)),
        )
}
