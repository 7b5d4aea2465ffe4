use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, IntoActiveModel, JoinType, QueryOrder, QuerySelect};

use super::{course, course_user, lecture, lecture_task, task_control};

/// A comment on a task control.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "task_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub task_control_id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::task_control::Entity",
        from = "Column::TaskControlId",
        to = "super::task_control::Column::Id",
        on_delete = "Cascade"
    )]
    TaskControl,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::task_control::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskControl.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Comments reachable through task control, task, lecture and course
    /// from a course the user is a member of.
    pub fn scoped(user_id: i64) -> Select<Entity> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::TaskControl.def())
            .join(JoinType::InnerJoin, task_control::Relation::Task.def())
            .join(JoinType::InnerJoin, lecture_task::Relation::Lecture.def())
            .join(JoinType::InnerJoin, lecture::Relation::Course.def())
            .join(JoinType::InnerJoin, course::Relation::CourseUsers.def())
            .filter(course_user::Column::UserId.eq(user_id))
    }

    pub async fn find_for_user(db: &DatabaseConnection, user_id: i64) -> Result<Vec<Self>, DbErr> {
        Self::scoped(user_id)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_one_for_user(
        db: &DatabaseConnection,
        user_id: i64,
        id: i64,
    ) -> Result<Option<Self>, DbErr> {
        Self::scoped(user_id)
            .filter(Column::Id.eq(id))
            .one(db)
            .await
    }

    pub async fn create(
        db: &DatabaseConnection,
        task_control_id: i64,
        author_id: i64,
        text: &str,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        ActiveModel {
            task_control_id: Set(task_control_id),
            author_id: Set(author_id),
            text: Set(text.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        task_control_id: i64,
        author_id: i64,
        text: &str,
    ) -> Result<Self, DbErr> {
        let Some(comment) = Entity::find_by_id(id).one(db).await? else {
            return Err(DbErr::RecordNotFound("Comment not found".into()));
        };

        let mut active = comment.into_active_model();
        active.task_control_id = Set(task_control_id);
        active.author_id = Set(author_id);
        active.text = Set(text.to_owned());
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
