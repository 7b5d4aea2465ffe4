#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, json_request, make_test_app, seed, token_for};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn members_can_mark_a_submission() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/task-controls/{}", data.control.id),
                Some(&token),
                json!({
                    "task": data.task.id,
                    "student": data.student.id,
                    "solution": "fn main() {}",
                    "mark": 75
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["mark"], 75);
        assert_eq!(json["message"], "Task control updated successfully");
    }

    #[tokio::test]
    async fn outsiders_and_anonymous_callers_get_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;
        let uri = format!("/api/task-controls/{}", data.control.id);
        let body = json!({ "task": data.task.id, "student": data.student.id, "mark": 100 });

        let token = token_for(&data.outsider);
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, Some(&token), body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(json_request("PUT", &uri, None, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
