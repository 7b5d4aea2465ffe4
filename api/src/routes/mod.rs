//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → health check (public)
//! - `/courses`, `/lectures`, `/tasks` → readable by anyone, writable by lecturers
//! - `/task-controls`, `/task-comments` → open; handlers scope what is reachable
//!
//! Every listing and every detail lookup is limited to rows reachable from a
//! course the caller is a member of.

use axum::Router;
use util::state::AppState;

pub mod common;
pub mod courses;
pub mod health;
pub mod lectures;
pub mod task_comments;
pub mod task_controls;
pub mod tasks;

use courses::course_routes;
use health::health_routes;
use lectures::lecture_routes;
use task_comments::task_comment_routes;
use task_controls::task_control_routes;
use tasks::task_routes;

/// Builds the router for all `/api` endpoints and binds the application state.
///
/// Course, lecture and task groups layer `allow_lecturer_or_get` on their
/// write routes only, so unmatched paths and methods keep axum's plain
/// 404/405 instead of an auth error.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/courses", course_routes())
        .nest("/lectures", lecture_routes())
        .nest("/tasks", task_routes())
        .nest("/task-controls", task_control_routes())
        .nest("/task-comments", task_comment_routes())
        .with_state(app_state)
}
