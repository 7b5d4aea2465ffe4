use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, IntoActiveModel, QueryOrder, QuerySelect, TransactionTrait};

use super::course_user::{self, Model as CourseUserModel};

/// A course. Membership (`course_users`) decides who can see it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_user::Entity")]
    CourseUsers,

    #[sea_orm(has_many = "super::lecture::Entity")]
    Lectures,
}

impl Related<super::course_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUsers.def()
    }
}

impl Related<super::lecture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lectures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Courses the user is a member of.
    pub fn scoped(user_id: i64) -> Select<Entity> {
        Entity::find()
            .inner_join(course_user::Entity)
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

    /// Inserts the course and its memberships in one transaction.
    ///
    /// `members` should already include the creator.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        description: Option<&str>,
        members: &[i64],
    ) -> Result<Self, DbErr> {
        let txn = db.begin().await?;

        let now = Utc::now();
        let course = ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        CourseUserModel::add_members(&txn, course.id, members).await?;

        txn.commit().await?;
        Ok(course)
    }

    /// Overwrites name and description. When `members` is given the
    /// membership is replaced with it as well.
    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        name: &str,
        description: Option<&str>,
        members: Option<&[i64]>,
    ) -> Result<Self, DbErr> {
        let Some(course) = Entity::find_by_id(id).one(db).await? else {
            return Err(DbErr::RecordNotFound("Course not found".into()));
        };

        let txn = db.begin().await?;

        let mut active = course.into_active_model();
        active.name = Set(name.to_owned());
        active.description = Set(description.map(str::to_owned));
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        if let Some(members) = members {
            CourseUserModel::replace_members(&txn, id, members).await?;
        }

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes the course. Lectures, tasks, task controls, comments and
    /// memberships go with it through `ON DELETE CASCADE`.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// Ids of the lectures under this course, for cleaning up their files.
    pub async fn lecture_ids(db: &DatabaseConnection, id: i64) -> Result<Vec<i64>, DbErr> {
        super::lecture::Entity::find()
            .select_only()
            .column(super::lecture::Column::Id)
            .filter(super::lecture::Column::CourseId.eq(id))
            .into_tuple::<i64>()
            .all(db)
            .await
    }

    pub async fn member_ids(&self, db: &DatabaseConnection) -> Result<Vec<i64>, DbErr> {
        CourseUserModel::member_ids(db, self.id).await
    }
}
