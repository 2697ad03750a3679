mod admin_courses;
mod create_course;
mod delete_course;
mod get_course;
mod list_courses;
mod list_instructor_courses;
mod update_course;

pub use admin_courses::*;
pub use create_course::*;
pub use delete_course::*;
pub use get_course::*;
pub use list_courses::*;
pub use list_instructor_courses::*;
pub use update_course::*;
