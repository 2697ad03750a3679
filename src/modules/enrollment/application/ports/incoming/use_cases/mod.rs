mod enroll_in_course;
mod grant_enrollment;
mod list_all_enrollments;
mod list_instructor_students;
mod list_my_courses;

pub use enroll_in_course::{EnrollInCourseError, EnrollInCourseUseCase};
pub use grant_enrollment::{
    GrantEnrollmentCommand, GrantEnrollmentError, GrantEnrollmentUseCase, GrantOutcome,
};
pub use list_all_enrollments::{ListAllEnrollmentsError, ListAllEnrollmentsUseCase};
pub use list_instructor_students::{ListInstructorStudentsError, ListInstructorStudentsUseCase};
pub use list_my_courses::{ListMyCoursesError, ListMyCoursesUseCase};
