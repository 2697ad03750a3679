use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub user_id: UserId,
    pub refresh_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Refresh token belongs to another user")]
    TokenOwnerMismatch,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, command: LogoutCommand) -> Result<(), LogoutError>;
}
