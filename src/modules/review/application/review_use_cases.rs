use std::sync::Arc;

use crate::review::application::ports::incoming::use_cases::{
    ListCourseReviewsUseCase, ListInstructorReviewsUseCase, SubmitReviewUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub submit: Arc<dyn SubmitReviewUseCase + Send + Sync>,
    pub list_for_course: Arc<dyn ListCourseReviewsUseCase + Send + Sync>,
    pub list_for_instructor: Arc<dyn ListInstructorReviewsUseCase + Send + Sync>,
}
