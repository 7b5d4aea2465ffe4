use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, IntoActiveModel, JoinType, QueryOrder, QuerySelect};

use super::{course, course_user, lecture};

/// A task set in a lecture.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lecture_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lecture_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecture::Entity",
        from = "Column::LectureId",
        to = "super::lecture::Column::Id",
        on_delete = "Cascade"
    )]
    Lecture,

    #[sea_orm(has_many = "super::task_control::Entity")]
    TaskControls,
}

impl Related<super::lecture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecture.def()
    }
}

impl Related<super::task_control::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskControls.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Tasks of lectures in courses the user is a member of.
    pub fn scoped(user_id: i64) -> Select<Entity> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Lecture.def())
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

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn create(
        db: &DatabaseConnection,
        lecture_id: i64,
        title: &str,
        description: Option<&str>,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        ActiveModel {
            lecture_id: Set(lecture_id),
            title: Set(title.to_owned()),
            description: Set(description.map(str::to_owned)),
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
        lecture_id: i64,
        title: &str,
        description: Option<&str>,
    ) -> Result<Self, DbErr> {
        let Some(task) = Self::get_by_id(db, id).await? else {
            return Err(DbErr::RecordNotFound("Task not found".into()));
        };

        let mut active = task.into_active_model();
        active.lecture_id = Set(lecture_id);
        active.title = Set(title.to_owned());
        active.description = Set(description.map(str::to_owned));
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
