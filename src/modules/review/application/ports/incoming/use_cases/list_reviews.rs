use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    review::application::domain::entities::{CourseReview, InstructorReview},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCourseReviewsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListCourseReviewsUseCase: Send + Sync {
    async fn execute(&self, course_id: CourseId)
        -> Result<Vec<CourseReview>, ListCourseReviewsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListInstructorReviewsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListInstructorReviewsUseCase: Send + Sync {
    async fn execute(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<InstructorReview>, ListInstructorReviewsError>;
}
