use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    progress::application::domain::entities::Progress,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProgressError {
    #[error("You are not enrolled in this course")]
    NotEnrolled,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProgressUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, course_id: CourseId)
        -> Result<Progress, GetProgressError>;
}
