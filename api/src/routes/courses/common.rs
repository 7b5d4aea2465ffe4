//! Course request/response models and the member-list check shared by
//! create and edit.

use crate::routes::common::{FieldErrors, invalid_pk};
use db::models::{course::Model as CourseModel, user::Model as UserModel};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// Member ids. The requesting user is always kept as a member.
    pub users: Option<Vec<i64>>,
}

impl CourseRequest {
    /// Collects field errors, including `users` entries that match no user.
    pub async fn check(&self, db: &DatabaseConnection) -> Result<FieldErrors, DbErr> {
        let mut errors = FieldErrors::of(self);
        if let Some(users) = &self.users {
            for id in UserModel::missing_ids(db, users).await? {
                errors.add("users", invalid_pk(id));
            }
        }
        Ok(errors)
    }

    /// Requested members plus the caller, or `None` when `users` was omitted.
    pub fn members_with(&self, user_id: i64) -> Option<Vec<i64>> {
        self.users.as_ref().map(|users| {
            let mut members = users.clone();
            members.push(user_id);
            members
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub users: Vec<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl CourseResponse {
    pub fn new(course: CourseModel, users: Vec<i64>) -> Self {
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
            users,
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}
