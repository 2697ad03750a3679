use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("Administrators cannot delete their own account")]
    CannotDeleteSelf,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, target: UserId) -> Result<(), DeleteUserError>;
}
