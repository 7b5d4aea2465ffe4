use crate::routes::common::{FieldErrors, invalid_pk};
use db::models::{
    task_comment::Model as CommentModel, task_control::Model as TaskControlModel,
    user::Model as UserModel,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    pub task_control: i64,
    pub author: i64,

    #[validate(length(min = 1, max = 5000, message = "Text must be between 1 and 5000 characters"))]
    pub text: String,
}

impl CommentRequest {
    pub async fn check(&self, db: &DatabaseConnection) -> Result<FieldErrors, DbErr> {
        let mut errors = FieldErrors::of(self);
        if TaskControlModel::get_by_id(db, self.task_control)
            .await?
            .is_none()
        {
            errors.add("task_control", invalid_pk(self.task_control));
        }
        if UserModel::get_by_id(db, self.author).await?.is_none() {
            errors.add("author", invalid_pk(self.author));
        }
        Ok(errors)
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub task_control: i64,
    pub author: i64,
    pub text: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CommentModel> for CommentResponse {
    fn from(comment: CommentModel) -> Self {
        Self {
            id: comment.id,
            task_control: comment.task_control_id,
            author: comment.author_id,
            text: comment.text,
            created_at: comment.created_at.to_rfc3339(),
            updated_at: comment.updated_at.to_rfc3339(),
        }
    }
}
