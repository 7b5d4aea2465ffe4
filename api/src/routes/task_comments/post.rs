use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use db::models::task_comment::Model as CommentModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, created, internal_error, parse_json};
use crate::routes::task_comments::common::{CommentRequest, CommentResponse};

/// POST /api/task-comments
///
/// ### Request Body
/// ```json
/// { "task_control": 3, "author": 1, "text": "Good use of iterators." }
/// ```
///
/// ### Responses
/// - `201 Created` with `Location: /api/task-comments/{id}`
/// - `400 Bad Request` when `text` is blank or too long, or a reference
///   does not exist
pub async fn create_comment(
    State(app_state): State<AppState>,
    user: Option<AuthUser>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();
    let req = parse_json(payload)?;

    req.check(db)
        .await
        .map_err(|e| internal_error("Failed to check comment references", e))?
        .check()?;

    let comment = CommentModel::create(db, req.task_control, req.author, &req.text)
        .await
        .map_err(|e| internal_error("Failed to create comment", e))?;

    tracing::info!(
        comment_id = comment.id,
        task_control_id = req.task_control,
        user = user.map(|u| u.user_id()).unwrap_or(0),
        "Comment created"
    );

    Ok(created(
        format!("/api/task-comments/{}", comment.id),
        CommentResponse::from(comment),
        "Comment created successfully",
    ))
}
