use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202609010001_create_users::Migration),
            Box::new(migrations::m202609010002_create_courses::Migration),
            Box::new(migrations::m202609010003_create_course_users::Migration),
            Box::new(migrations::m202609010004_create_lectures::Migration),
            Box::new(migrations::m202609010005_create_lecture_tasks::Migration),
            Box::new(migrations::m202609010006_create_task_controls::Migration),
            Box::new(migrations::m202609010007_create_task_comments::Migration),
        ]
    }
}
