#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, empty_request, make_test_app, seed, token_for};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn comments_are_scoped_through_their_task_control() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/task-comments", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let comments = json["data"].as_array().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0]["id"], data.comment.id);
        assert_eq!(comments[0]["task_control"], data.control.id);
        assert_eq!(comments[0]["author"], data.lecturer.id);
        assert_eq!(comments[0]["text"], "Looks good");

        let token = token_for(&data.outsider);
        let response = app
            .oneshot(empty_request("GET", "/api/task-comments", Some(&token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]));
    }
}
