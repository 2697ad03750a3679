mod create_course_service;
mod delete_course_service;
mod get_course_service;
mod list_all_courses_service;
mod list_courses_service;
mod list_instructor_courses_service;
mod set_course_status_service;
mod update_course_service;

pub use create_course_service::CreateCourseService;
pub use delete_course_service::DeleteCourseService;
pub use get_course_service::GetCourseService;
pub use list_all_courses_service::ListAllCoursesService;
pub use list_courses_service::ListCoursesService;
pub use list_instructor_courses_service::ListInstructorCoursesService;
pub use set_course_status_service::SetCourseStatusService;
pub use update_course_service::UpdateCourseService;
