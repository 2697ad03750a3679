use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
};

use super::GrantOutcome;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrollInCourseError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("This course requires payment")]
    PaymentRequired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EnrollInCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<GrantOutcome, EnrollInCourseError>;
}
