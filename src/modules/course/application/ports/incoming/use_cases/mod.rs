pub mod course_input;
mod create_course;
mod delete_course;
mod get_course;
mod list_all_courses;
mod list_courses;
mod list_instructor_courses;
mod set_course_status;
mod update_course;

pub use course_input::{CourseCommandError, LessonInput, QuizQuestionInput, SectionInput};
pub use create_course::{
    CreateCourseCommand, CreateCourseError, CreateCourseInput, CreateCourseUseCase,
};
pub use delete_course::{DeleteCourseError, DeleteCourseUseCase};
pub use get_course::{CourseViewer, GetCourseError, GetCourseUseCase};
pub use list_all_courses::{ListAllCoursesError, ListAllCoursesUseCase};
pub use list_courses::{ListCoursesError, ListCoursesUseCase};
pub use list_instructor_courses::{ListInstructorCoursesError, ListInstructorCoursesUseCase};
pub use set_course_status::{SetCourseStatusError, SetCourseStatusUseCase};
pub use update_course::{
    UpdateCourseCommand, UpdateCourseError, UpdateCourseInput, UpdateCourseUseCase,
};
