use async_trait::async_trait;

use crate::auth::application::domain::entities::{InstructorStatus, UserId, UserProfile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetInstructorStatusError {
    #[error("User not found")]
    UserNotFound,

    #[error("User is not an instructor")]
    NotAnInstructor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetInstructorStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        status: InstructorStatus,
    ) -> Result<UserProfile, SetInstructorStatusError>;
}
