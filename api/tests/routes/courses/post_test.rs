#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, json_request, make_test_app, seed, token_for};
    use axum::http::{StatusCode, header::LOCATION};
    use db::models::course::Model as CourseModel;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn create_adds_creator_as_member() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let body = json!({
            "name": "Operating Systems",
            "description": "Processes and scheduling",
            "users": [data.student.id]
        });
        let response = app
            .oneshot(json_request("POST", "/api/courses", Some(&token), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response.headers()[LOCATION].to_str().unwrap().to_owned();
        let json = body_json(response).await;
        let id = json["data"]["id"].as_i64().unwrap();
        assert_eq!(location, format!("/api/courses/{id}"));
        assert_eq!(json["message"], "Course created successfully");
        assert_eq!(
            json["data"]["users"],
            json!([data.lecturer.id, data.student.id])
        );
    }

    #[tokio::test]
    async fn create_without_users_has_only_the_creator() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/courses",
                Some(&token),
                json!({ "name": "Databases" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["data"]["users"], json!([data.lecturer.id]));
        assert!(json["data"]["description"].is_null());
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_and_not_persisted() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;
        let before = CourseModel::find_for_user(app_state.db(), data.lecturer.id)
            .await
            .unwrap()
            .len();

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/courses",
                Some(&token),
                json!({ "name": "", "users": [9999] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(
            json["data"]["name"][0],
            "Name must be between 1 and 255 characters"
        );
        assert_eq!(
            json["data"]["users"][0],
            "Invalid pk \"9999\" - object does not exist."
        );

        let after = CourseModel::find_for_user(app_state.db(), data.lecturer.id)
            .await
            .unwrap()
            .len();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/api/courses")
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .body(axum::body::Body::from("{\"name\": "))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn students_cannot_create_courses() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/courses",
                Some(&token),
                json!({ "name": "Sneaky" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn anonymous_cannot_create_courses() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/courses",
                None,
                json!({ "name": "Anonymous" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
