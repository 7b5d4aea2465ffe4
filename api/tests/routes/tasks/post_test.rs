#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, json_request, make_test_app, seed, token_for};
    use axum::http::{StatusCode, header::LOCATION};
    use db::models::lecture_task::Model as TaskModel;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn create_task_in_own_lecture() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/tasks",
                Some(&token),
                json!({
                    "lecture": data.lecture.id,
                    "title": "Implement Drop",
                    "description": "Log when a guard is released"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().contains_key(LOCATION));

        let json = body_json(response).await;
        assert_eq!(json["data"]["title"], "Implement Drop");
        assert_eq!(json["data"]["description"], "Log when a guard is released");
        assert_eq!(json["message"], "Task created successfully");
    }

    #[tokio::test]
    async fn unknown_lecture_and_long_title_are_reported_together() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/tasks",
                Some(&token),
                json!({ "lecture": 4040, "title": "t".repeat(256) }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["data"]["lecture"][0],
            "Invalid pk \"4040\" - object does not exist."
        );
        assert_eq!(
            json["data"]["title"][0],
            "Title must be between 1 and 255 characters"
        );

        let tasks = TaskModel::find_for_user(app_state.db(), data.lecturer.id)
            .await
            .unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[tokio::test]
    async fn students_cannot_create_tasks() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/tasks",
                Some(&token),
                json!({ "lecture": data.lecture.id, "title": "Homework" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
