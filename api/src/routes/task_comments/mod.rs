//! Routes for `/api/task-comments`: comments on task controls.
//!
//! Open like the task control routes; listing, editing and deleting are
//! limited to comments reachable from the caller's courses through
//! `task_control -> task -> lecture -> course`.

use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/task-comments` route group.
///
/// Routes:
/// - `GET    /task-comments`
/// - `POST   /task-comments`
/// - `PUT    /task-comments/{comment_id}`
/// - `DELETE /task-comments/{comment_id}`
pub fn task_comment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::get_comments).post(post::create_comment))
        .route(
            "/{comment_id}",
            put(put::edit_comment).delete(delete::delete_comment),
        )
}
