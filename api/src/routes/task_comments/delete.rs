use axum::extract::{Path, State};
use db::models::task_comment::Model as CommentModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{ApiResult, internal_error, no_content, not_found};

/// DELETE /api/task-comments/{comment_id}
pub async fn delete_comment(
    State(app_state): State<AppState>,
    Path(comment_id): Path<i64>,
    user: Option<AuthUser>,
) -> ApiResult {
    let db = app_state.db();
    let user = user.ok_or_else(|| not_found("Comment not found"))?;

    CommentModel::find_one_for_user(db, user.user_id(), comment_id)
        .await
        .map_err(|e| internal_error("Failed to fetch comment", e))?
        .ok_or_else(|| not_found("Comment not found"))?;

    CommentModel::delete(db, comment_id)
        .await
        .map_err(|e| internal_error("Failed to delete comment", e))?;

    tracing::info!(comment_id, user = user.user_id(), "Comment deleted");
    Ok(no_content())
}
