//! Routes for `/api/tasks`: tasks set in lectures of the caller's courses.

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

/// Builds the `/tasks` route group.
///
/// Routes:
/// - `GET    /tasks`            → tasks visible to the caller
/// - `POST   /tasks`            → create a task (lecturer only)
/// - `PUT    /tasks/{task_id}`  → edit a task (lecturer only)
/// - `DELETE /tasks/{task_id}`  → delete a task (lecturer only)
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::get_tasks))
        .route("/", post(post::create_task).route_layer(from_fn(allow_lecturer_or_get)))
        .route("/{task_id}", put(put::edit_task).route_layer(from_fn(allow_lecturer_or_get)))
        .route("/{task_id}", delete(delete::delete_task).route_layer(from_fn(allow_lecturer_or_get)))
}
