#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, json_request, make_test_app, seed, token_for};
    use axum::http::{StatusCode, header::LOCATION};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn students_may_submit() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/task-controls",
                Some(&token),
                json!({
                    "task": data.task.id,
                    "student": data.student.id,
                    "solution": "fn main() { println!(\"done\"); }"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response.headers()[LOCATION].to_str().unwrap().to_owned();
        let json = body_json(response).await;
        assert_eq!(
            location,
            format!("/api/task-controls/{}", json["data"]["id"])
        );
        assert_eq!(json["data"]["task"], data.task.id);
        assert!(json["data"]["mark"].is_null());
    }

    #[tokio::test]
    async fn anonymous_callers_may_submit() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/task-controls",
                None,
                json!({ "task": data.task.id, "student": data.student.id }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn missing_references_and_bad_mark_are_rejected() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/task-controls",
                Some(&token),
                json!({ "task": 777, "student": 888, "mark": 101 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["data"]["task"][0],
            "Invalid pk \"777\" - object does not exist."
        );
        assert_eq!(
            json["data"]["student"][0],
            "Invalid pk \"888\" - object does not exist."
        );
        assert_eq!(json["data"]["mark"][0], "Mark must be between 0 and 100");
    }
}
