#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, empty_request, make_test_app, seed, token_for};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_is_public() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(empty_request("GET", "/api/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
    }

    #[tokio::test]
    async fn unknown_paths_and_methods_use_default_statuses() {
        let (app, _) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/nothing-here", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(empty_request("PATCH", "/api/tasks", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unlisted_methods_skip_the_lecturer_guard() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let response = app
            .clone()
            .oneshot(empty_request(
                "PATCH",
                &format!("/api/courses/{}", data.course.id),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/lectures", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app
            .oneshot(empty_request(
                "POST",
                &format!("/api/tasks/{}", data.task.id),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
