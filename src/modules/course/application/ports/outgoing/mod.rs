pub mod course_query;
pub mod course_repository;

pub use course_query::{CourseFilter, CourseQuery, CourseQueryError};
pub use course_repository::{CourseChanges, CourseRepository, CourseRepositoryError, NewCourse};
