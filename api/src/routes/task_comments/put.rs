use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use db::models::task_comment::Model as CommentModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, not_found, ok, parse_json};
use crate::routes::task_comments::common::{CommentRequest, CommentResponse};

/// PUT /api/task-comments/{comment_id}
///
/// ### Responses
/// - `200 OK` with the updated comment
/// - `400 Bad Request`
/// - `404 Not Found` if the comment is outside the caller's courses
pub async fn edit_comment(
    State(app_state): State<AppState>,
    Path(comment_id): Path<i64>,
    user: Option<AuthUser>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> ApiResult {
    let db = app_state.db();
    let user = user.ok_or_else(|| not_found("Comment not found"))?;

    CommentModel::find_one_for_user(db, user.user_id(), comment_id)
        .await
        .map_err(|e| internal_error("Failed to fetch comment", e))?
        .ok_or_else(|| not_found("Comment not found"))?;

    let req = parse_json(payload)?;
    req.check(db)
        .await
        .map_err(|e| internal_error("Failed to check comment references", e))?
        .check()?;

    let comment = CommentModel::edit(db, comment_id, req.task_control, req.author, &req.text)
        .await
        .map_err(|e| internal_error("Failed to update comment", e))?;

    tracing::info!(comment_id, user = user.user_id(), "Comment updated");
    Ok(ok(CommentResponse::from(comment), "Comment updated successfully"))
}
