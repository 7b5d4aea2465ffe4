use crate::routes::common::{FieldErrors, invalid_pk};
use db::models::{
    lecture_task::Model as TaskModel,
    task_control::{Model as TaskControlModel, TaskControlFields},
    user::Model as UserModel,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct TaskControlRequest {
    pub task: i64,
    pub student: i64,

    #[validate(length(max = 10000, message = "Solution must be at most 10000 characters"))]
    pub solution: Option<String>,

    #[validate(range(min = 0, max = 100, message = "Mark must be between 0 and 100"))]
    pub mark: Option<i32>,
}

impl TaskControlRequest {
    /// Field errors, including a `task` or `student` that does not exist.
    pub async fn check(&self, db: &DatabaseConnection) -> Result<FieldErrors, DbErr> {
        let mut errors = FieldErrors::of(self);
        if TaskModel::get_by_id(db, self.task).await?.is_none() {
            errors.add("task", invalid_pk(self.task));
        }
        if UserModel::get_by_id(db, self.student).await?.is_none() {
            errors.add("student", invalid_pk(self.student));
        }
        Ok(errors)
    }

    pub fn fields(&self) -> TaskControlFields<'_> {
        TaskControlFields {
            task_id: self.task,
            student_id: self.student,
            solution: self.solution.as_deref(),
            mark: self.mark,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskControlResponse {
    pub id: i64,
    pub task: i64,
    pub student: i64,
    pub solution: Option<String>,
    pub mark: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TaskControlModel> for TaskControlResponse {
    fn from(control: TaskControlModel) -> Self {
        Self {
            id: control.id,
            task: control.task_id,
            student: control.student_id,
            solution: control.solution,
            mark: control.mark,
            created_at: control.created_at.to_rfc3339(),
            updated_at: control.updated_at.to_rfc3339(),
        }
    }
}
