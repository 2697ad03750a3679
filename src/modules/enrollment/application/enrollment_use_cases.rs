use std::sync::Arc;

use crate::enrollment::application::ports::incoming::use_cases::{
    EnrollInCourseUseCase, GrantEnrollmentUseCase, ListAllEnrollmentsUseCase,
    ListInstructorStudentsUseCase, ListMyCoursesUseCase,
};

#[derive(Clone)]
pub struct EnrollmentUseCases {
    pub enroll: Arc<dyn EnrollInCourseUseCase + Send + Sync>,
    pub grant: Arc<dyn GrantEnrollmentUseCase + Send + Sync>,
    pub my_courses: Arc<dyn ListMyCoursesUseCase + Send + Sync>,
    pub instructor_students: Arc<dyn ListInstructorStudentsUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListAllEnrollmentsUseCase + Send + Sync>,
}
