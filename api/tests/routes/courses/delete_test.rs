#[cfg(test)]
mod tests {
    use crate::helpers::{
        body_json, empty_request, make_test_app, multipart_request, seed, token_for,
    };
    use axum::http::StatusCode;
    use db::models::{lecture::Model as LectureModel, task_control::Model as TaskControlModel};
    use serial_test::serial;
    use tower::ServiceExt;
    use util::{paths, test_helpers::setup_test_storage_root};

    #[tokio::test]
    #[serial]
    async fn delete_removes_course_from_list() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.lecturer);
        let uri = format!("/api/courses/{}", data.course.id);
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &uri, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request("GET", "/api/courses", Some(&token)))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"], serde_json::json!([]));

        // Everything below the course goes with it.
        assert!(
            LectureModel::find_for_user(app_state.db(), data.lecturer.id)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            TaskControlModel::get_by_id(app_state.db(), data.control.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn foreign_course_cannot_be_deleted() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.outsider);
        let uri = format!("/api/courses/{}", data.course.id);
        let response = app
            .oneshot(empty_request("DELETE", &uri, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn students_cannot_delete_courses() {
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;

        let token = token_for(&data.student);
        let uri = format!("/api/courses/{}", data.course.id);
        let response = app
            .oneshot(empty_request("DELETE", &uri, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn delete_removes_lecture_files() {
        let _tmp = setup_test_storage_root();
        let (app, app_state) = make_test_app().await;
        let data = seed(app_state.db()).await;
        let token = token_for(&data.lecturer);

        let course = data.course.id.to_string();
        let response = app
            .clone()
            .oneshot(multipart_request(
                "PUT",
                &format!("/api/lectures/{}", data.lecture.id),
                Some(&token),
                &[("course", course.as_str()), ("topic", "Ownership")],
                Some(("presentation", "slides.pdf", &b"%PDF-1.7"[..])),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(paths::lecture_dir(data.lecture.id).exists());

        let response = app
            .oneshot(empty_request(
                "DELETE",
                &format!("/api/courses/{}", data.course.id),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(!paths::lecture_dir(data.lecture.id).exists());
    }
}
