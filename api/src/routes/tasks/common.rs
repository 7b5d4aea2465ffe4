use crate::routes::common::{FieldErrors, invalid_pk};
use db::models::{lecture::Model as LectureModel, lecture_task::Model as TaskModel};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct TaskRequest {
    pub lecture: i64,

    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
}

impl TaskRequest {
    /// Field errors, including a `lecture` outside the caller's courses.
    pub async fn check(&self, db: &DatabaseConnection, user_id: i64) -> Result<FieldErrors, DbErr> {
        let mut errors = FieldErrors::of(self);
        if LectureModel::find_one_for_user(db, user_id, self.lecture)
            .await?
            .is_none()
        {
            errors.add("lecture", invalid_pk(self.lecture));
        }
        Ok(errors)
    }
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub lecture: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TaskModel> for TaskResponse {
    fn from(task: TaskModel) -> Self {
        Self {
            id: task.id,
            lecture: task.lecture_id,
            title: task.title,
            description: task.description,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}
