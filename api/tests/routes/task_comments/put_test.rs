#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, json_request, make_test_app, seed, token_for};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn edit_comment_text() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/task-comments/{}", data.comment.id),
                Some(&token),
                json!({
                    "task_control": data.control.id,
                    "author": data.lecturer.id,
                    "text": "Looks good, but add tests"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["text"], "Looks good, but add tests");
        assert_eq!(json["data"]["task_control"], data.control.id);
    }

    #[tokio::test]
    async fn comment_outside_scope_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.outsider);
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/task-comments/{}", data.comment.id),
                Some(&token),
                json!({ "task_control": data.control.id, "author": data.outsider.id, "text": "Mine now" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
