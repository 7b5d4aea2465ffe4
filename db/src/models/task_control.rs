use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, IntoActiveModel, JoinType, QueryOrder, QuerySelect};

use super::{course, course_user, lecture, lecture_task};

/// A student's submission for a task, with an optional mark.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "task_controls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub task_id: i64,
    pub student_id: i64,
    pub solution: Option<String>,
    pub mark: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecture_task::Entity",
        from = "Column::TaskId",
        to = "super::lecture_task::Column::Id",
        on_delete = "Cascade"
    )]
    Task,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(has_many = "super::task_comment::Entity")]
    Comments,
}

impl Related<super::lecture_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::task_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields written on create and on full update.
#[derive(Debug, Clone)]
pub struct TaskControlFields<'a> {
    pub task_id: i64,
    pub student_id: i64,
    pub solution: Option<&'a str>,
    pub mark: Option<i32>,
}

impl Model {
    /// Task controls of tasks in courses the user is a member of.
    pub fn scoped(user_id: i64) -> Select<Entity> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Task.def())
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

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn create(db: &DatabaseConnection, fields: TaskControlFields<'_>) -> Result<Self, DbErr> {
        let now = Utc::now();
        ActiveModel {
            task_id: Set(fields.task_id),
            student_id: Set(fields.student_id),
            solution: Set(fields.solution.map(str::to_owned)),
            mark: Set(fields.mark),
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
        fields: TaskControlFields<'_>,
    ) -> Result<Self, DbErr> {
        let Some(control) = Self::get_by_id(db, id).await? else {
            return Err(DbErr::RecordNotFound("Task control not found".into()));
        };

        let mut active = control.into_active_model();
        active.task_id = Set(fields.task_id);
        active.student_id = Set(fields.student_id);
        active.solution = Set(fields.solution.map(str::to_owned));
        active.mark = Set(fields.mark);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
