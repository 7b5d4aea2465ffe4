#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, empty_request, make_test_app, seed, token_for};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn controls_are_listed_for_course_members_only() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/task-controls", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let controls = json["data"].as_array().unwrap();
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0]["id"], data.control.id);
        assert_eq!(controls[0]["student"], data.student.id);
        assert_eq!(controls[0]["solution"], "fn main() {}");
        assert!(controls[0]["mark"].is_null());

        let token = token_for(&data.outsider);
        let response = app
            .oneshot(empty_request("GET", "/api/task-controls", Some(&token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]));
    }
}
