use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};
use std::collections::BTreeSet;

/// Represents a user in the `users` table.
///
/// Accounts are provisioned outside this service; the API only references
/// them as course members, students and comment authors.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Lecturers may write courses, lectures and tasks.
    pub lecturer: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_user::Entity")]
    CourseUsers,
}

impl Related<super::course_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        username: &str,
        email: &str,
        lecturer: bool,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        let active = ActiveModel {
            username: Set(username.to_owned()),
            email: Set(email.to_owned()),
            lecturer: Set(lecturer),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Returns the ids from `ids` that have no matching user, in ascending order.
    pub async fn missing_ids(db: &DatabaseConnection, ids: &[i64]) -> Result<Vec<i64>, DbErr> {
        let wanted: BTreeSet<i64> = ids.iter().copied().collect();
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let found: BTreeSet<i64> = Entity::find()
            .filter(Column::Id.is_in(wanted.iter().copied()))
            .order_by_asc(Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();

        Ok(wanted.difference(&found).copied().collect())
    }
}
