#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, json_request, make_test_app, seed, token_for};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn edit_task() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/tasks/{}", data.task.id),
                Some(&token),
                json!({
                    "lecture": data.lecture.id,
                    "title": "Fix all borrow errors",
                    "description": "Without cloning"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["id"], data.task.id);
        assert_eq!(json["data"]["title"], "Fix all borrow errors");
        assert_eq!(json["data"]["description"], "Without cloning");
    }

    #[tokio::test]
    async fn foreign_task_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.outsider);
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/tasks/{}", data.task.id),
                Some(&token),
                json!({ "lecture": data.lecture.id, "title": "Hijacked" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn students_cannot_edit_tasks() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/tasks/{}", data.task.id),
                Some(&token),
                json!({ "lecture": data.lecture.id, "title": "Easier" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
