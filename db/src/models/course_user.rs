use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, QueryOrder};
use std::collections::{BTreeSet, HashMap};

/// Course membership. A user "owns" every course they are a member of, and
/// through it every lecture, task, task control and comment below it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
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

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Adds each user in `user_ids` to the course. Duplicates are collapsed.
    pub async fn add_members<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        user_ids: &[i64],
    ) -> Result<(), DbErr> {
        let ids: BTreeSet<i64> = user_ids.iter().copied().collect();
        if ids.is_empty() {
            return Ok(());
        }

        let rows = ids.into_iter().map(|user_id| ActiveModel {
            course_id: Set(course_id),
            user_id: Set(user_id),
        });

        Entity::insert_many(rows).exec_without_returning(db).await?;
        Ok(())
    }

    /// Replaces the course's membership with exactly `user_ids`.
    pub async fn replace_members<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        user_ids: &[i64],
    ) -> Result<(), DbErr> {
        Entity::delete_many()
            .filter(Column::CourseId.eq(course_id))
            .exec(db)
            .await?;
        Self::add_members(db, course_id, user_ids).await
    }

    /// Member ids of a course, ascending.
    pub async fn member_ids<C: ConnectionTrait>(db: &C, course_id: i64) -> Result<Vec<i64>, DbErr> {
        Ok(Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::UserId)
            .all(db)
            .await?
            .into_iter()
            .map(|m| m.user_id)
            .collect())
    }

    /// Member ids for each of `course_ids`, ascending. Courses without members
    /// are absent from the map.
    pub async fn members_by_course<C: ConnectionTrait>(
        db: &C,
        course_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>, DbErr> {
        let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
        if course_ids.is_empty() {
            return Ok(grouped);
        }

        let rows = Entity::find()
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .order_by_asc(Column::CourseId)
            .order_by_asc(Column::UserId)
            .all(db)
            .await?;

        for row in rows {
            grouped.entry(row.course_id).or_default().push(row.user_id);
        }
        Ok(grouped)
    }

    pub async fn is_member<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        user_id: i64,
    ) -> Result<bool, DbErr> {
        Ok(Entity::find_by_id((course_id, user_id)).one(db).await?.is_some())
    }
}
