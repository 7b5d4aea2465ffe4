#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, json_request, make_test_app, seed, token_for};
    use axum::http::{StatusCode, header::LOCATION};
    use db::models::lecture::Model as LectureModel;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn lecturer_creates_lecture_in_own_course() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/lectures",
                Some(&token),
                json!({ "course": data.course.id, "topic": "Lifetimes" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response.headers()[LOCATION].to_str().unwrap().to_owned();
        let json = body_json(response).await;
        assert_eq!(json["data"]["topic"], "Lifetimes");
        assert_eq!(json["data"]["course"], data.course.id);
        assert_eq!(location, format!("/api/lectures/{}", json["data"]["id"]));
    }

    #[tokio::test]
    async fn course_outside_scope_is_an_invalid_pk() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/lectures",
                Some(&token),
                json!({ "course": data.other_course.id, "topic": "Sneaky" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["data"]["course"][0],
            format!("Invalid pk \"{}\" - object does not exist.", data.other_course.id)
        );
        assert!(
            LectureModel::find_for_user(app_state.db(), data.outsider.id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn blank_topic_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/lectures",
                Some(&token),
                json!({ "course": data.course.id, "topic": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let lectures = LectureModel::find_for_user(app_state.db(), data.lecturer.id)
            .await
            .unwrap();
        assert_eq!(lectures.len(), 1);
    }

    #[tokio::test]
    async fn students_cannot_create_lectures() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/lectures",
                Some(&token),
                json!({ "course": data.course.id, "topic": "Student lecture" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
