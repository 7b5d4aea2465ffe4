use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, IntoActiveModel, JoinType, QueryOrder, QuerySelect};

use super::{course, course_user};
use crate::storage::{self, StorageError};

/// A lecture within a course, optionally carrying an uploaded presentation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lectures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub topic: String,
    /// Path of the presentation file, relative to the storage root.
    pub presentation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,

    #[sea_orm(has_many = "super::lecture_task::Entity")]
    Tasks,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::lecture_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Lectures of courses the user is a member of.
    pub fn scoped(user_id: i64) -> Select<Entity> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Course.def())
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

    pub async fn create(db: &DatabaseConnection, course_id: i64, topic: &str) -> Result<Self, DbErr> {
        let now = Utc::now();
        ActiveModel {
            course_id: Set(course_id),
            topic: Set(topic.to_owned()),
            presentation: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Overwrites course and topic, and replaces the presentation when an
    /// upload (`filename`, `bytes`) is given.
    ///
    /// The file is written before the row is touched, so a storage failure
    /// leaves the lecture unchanged. If the update itself fails, the newly
    /// written file is removed again. The replaced file is removed only after
    /// the row points at the new one.
    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        course_id: i64,
        topic: &str,
        upload: Option<(&str, &[u8])>,
    ) -> Result<Self, StorageError> {
        let Some(lecture) = Entity::find_by_id(id).one(db).await? else {
            return Err(DbErr::RecordNotFound("Lecture not found".into()).into());
        };
        let previous = lecture.presentation.clone();

        let written = match upload {
            Some((filename, bytes)) => Some(storage::write_presentation(id, filename, bytes)?),
            None => None,
        };

        let mut active = lecture.into_active_model();
        active.course_id = Set(course_id);
        active.topic = Set(topic.to_owned());
        if let Some(relative) = &written {
            active.presentation = Set(Some(relative.clone()));
        }
        active.updated_at = Set(Utc::now());

        let updated = match active.update(db).await {
            Ok(updated) => updated,
            Err(e) => {
                // Same name as the stored file: it was overwritten in place.
                let unsaved = written
                    .as_deref()
                    .filter(|new| previous.as_deref() != Some(*new));
                if let Some(new) = unsaved {
                    if let Err(io) = storage::remove_file(new) {
                        tracing::warn!(lecture_id = id, error = %io, "Failed to remove unsaved presentation");
                    }
                }
                return Err(e.into());
            }
        };

        if let (Some(old), Some(new)) = (previous.as_deref(), written.as_deref()) {
            if old != new {
                if let Err(e) = storage::remove_file(old) {
                    tracing::warn!(lecture_id = id, error = %e, "Failed to remove replaced presentation");
                }
            }
        }

        Ok(updated)
    }

    /// Deletes the lecture row and everything below it. Stored files are
    /// left to the caller (`storage::remove_lecture_dir`).
    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
