use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    review::application::domain::entities::{CourseReview, InstructorReview},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Newest first.
    async fn list_for_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<CourseReview>, ReviewQueryError>;

    async fn list_for_instructor(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<InstructorReview>, ReviewQueryError>;
}
