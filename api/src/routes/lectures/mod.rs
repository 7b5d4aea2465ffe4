//! # Lectures Routes Module
//!
//! Routes for `/api/lectures`. Lectures are visible to members of their
//! course; writes need the lecturer claim. Updates are multipart so a
//! presentation file can be uploaded alongside the fields.

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

use delete::delete_lecture;
use get::get_lectures;
use post::create_lecture;
use put::edit_lecture;

/// Builds the `/lectures` route group.
///
/// Routes:
/// - `GET    /lectures`               → lectures in the caller's courses
/// - `POST   /lectures`               → create a lecture (JSON)
/// - `PUT    /lectures/{lecture_id}`  → edit a lecture (multipart)
/// - `DELETE /lectures/{lecture_id}`  → delete a lecture and its file
pub fn lecture_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lectures))
        .route("/", post(create_lecture).route_layer(from_fn(allow_lecturer_or_get)))
        .route("/{lecture_id}", put(edit_lecture).route_layer(from_fn(allow_lecturer_or_get)))
        .route(
            "/{lecture_id}",
            delete(delete_lecture).route_layer(from_fn(allow_lecturer_or_get)),
        )
}
