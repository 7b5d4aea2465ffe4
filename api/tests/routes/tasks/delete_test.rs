#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, empty_request, make_test_app, seed, token_for};
    use axum::http::StatusCode;
    use db::models::task_control::Model as TaskControlModel;
    use tower::ServiceExt;

    #[tokio::test]
    async fn delete_task_and_its_controls() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .clone()
            .oneshot(empty_request(
                "DELETE",
                &format!("/api/tasks/{}", data.task.id),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request("GET", "/api/tasks", Some(&token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]));

        assert!(
            TaskControlModel::get_by_id(app_state.db(), data.control.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let uri = format!("/api/tasks/{}", data.task.id);
        for expected in [StatusCode::NO_CONTENT, StatusCode::NOT_FOUND] {
            let response = app
                .clone()
                .oneshot(empty_request("DELETE", &uri, Some(&token)))
                .await
                .unwrap();
            assert_eq!(response.status(), expected);
        }
    }
}
