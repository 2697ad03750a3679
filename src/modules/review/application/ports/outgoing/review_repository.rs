use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    review::application::domain::entities::{RatingSummary, Review},
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Creates or replaces the user's review and refreshes the course aggregate atomically.
    async fn upsert(
        &self,
        data: NewReview,
    ) -> Result<(Review, RatingSummary), ReviewRepositoryError>;
}
