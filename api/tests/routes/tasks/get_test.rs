#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, empty_request, make_test_app, seed, token_for};
    use axum::http::StatusCode;
    use db::models::{lecture::Model as LectureModel, lecture_task::Model as TaskModel};
    use tower::ServiceExt;

    #[tokio::test]
    async fn tasks_follow_lecture_scope() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;
        let db = app_state.db();
        let parsing = LectureModel::create(db, data.other_course.id, "Parsing")
            .await
            .unwrap();
        TaskModel::create(db, parsing.id, "Write a lexer", Some("Tokens only"))
            .await
            .unwrap();

        let token = token_for(&data.student);
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/tasks", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let tasks = json["data"].as_array().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["id"], data.task.id);
        assert_eq!(tasks[0]["lecture"], data.lecture.id);
        assert_eq!(tasks[0]["title"], "Fix the borrow errors");

        let response = app
            .oneshot(empty_request("GET", "/api/tasks", None))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]));
    }
}
