mod enroll_in_course_service;
mod grant_enrollment_service;
mod list_enrollments_service;

pub use enroll_in_course_service::EnrollInCourseService;
pub use grant_enrollment_service::GrantEnrollmentService;
pub use list_enrollments_service::{
    ListAllEnrollmentsService, ListInstructorStudentsService, ListMyCoursesService,
};
