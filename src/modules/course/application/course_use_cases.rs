use std::sync::Arc;

use crate::course::application::ports::incoming::use_cases::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase, ListAllCoursesUseCase,
    ListCoursesUseCase, ListInstructorCoursesUseCase, SetCourseStatusUseCase, UpdateCourseUseCase,
};

#[derive(Clone)]
pub struct CourseUseCases {
    pub list: Arc<dyn ListCoursesUseCase + Send + Sync>,
    pub get: Arc<dyn GetCourseUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCourseUseCase + Send + Sync>,
    pub list_for_instructor: Arc<dyn ListInstructorCoursesUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCourseUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCourseUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListAllCoursesUseCase + Send + Sync>,
    pub set_status: Arc<dyn SetCourseStatusUseCase + Send + Sync>,
}
