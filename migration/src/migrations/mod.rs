pub mod m202609010001_create_users;
pub mod m202609010002_create_courses;
pub mod m202609010003_create_course_users;
pub mod m202609010004_create_lectures;
pub mod m202609010005_create_lecture_tasks;
pub mod m202609010006_create_task_controls;
pub mod m202609010007_create_task_comments;
