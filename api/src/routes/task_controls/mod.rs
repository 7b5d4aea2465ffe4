//! # Task Controls Routes Module
//!
//! Routes for `/api/task-controls`: student submissions for a task, with an
//! optional mark.
//!
//! No guard is layered on this group. Anyone may create a task control;
//! listing, editing and deleting still only reach the controls of tasks in
//! the caller's courses.

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

use delete::delete_task_control;
use get::get_task_controls;
use post::create_task_control;
use put::edit_task_control;

/// Builds the `/task-controls` route group.
///
/// Routes:
/// - `GET    /task-controls`
/// - `POST   /task-controls`
/// - `PUT    /task-controls/{task_control_id}`
/// - `DELETE /task-controls/{task_control_id}`
pub fn task_control_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_task_controls).post(create_task_control))
        .route(
            "/{task_control_id}",
            put(edit_task_control).delete(delete_task_control),
        )
}
