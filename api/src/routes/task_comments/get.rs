use axum::{extract::State, response::IntoResponse};
use db::models::task_comment::Model as CommentModel;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::common::{internal_error, ok};
use crate::routes::task_comments::common::CommentResponse;

/// GET /api/task-comments
pub async fn get_comments(
    State(app_state): State<AppState>,
    user: Option<AuthUser>,
) -> impl IntoResponse {
    let Some(user) = user else {
        return ok(Vec::<CommentResponse>::new(), "Comments retrieved successfully");
    };

    match CommentModel::find_for_user(app_state.db(), user.user_id()).await {
        Ok(comments) => ok(
            comments
                .into_iter()
                .map(CommentResponse::from)
                .collect::<Vec<_>>(),
            "Comments retrieved successfully",
        ),
        Err(e) => internal_error("Failed to list comments", e),
    }
}
