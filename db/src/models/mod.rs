pub mod course;
pub mod course_user;
pub mod lecture;
pub mod lecture_task;
pub mod task_comment;
pub mod task_control;
pub mod user;

pub use course::Entity as Course;
pub use course_user::Entity as CourseUser;
pub use lecture::Entity as Lecture;
pub use lecture_task::Entity as LectureTask;
pub use task_comment::Entity as TaskComment;
pub use task_control::Entity as TaskControl;
pub use user::Entity as User;
