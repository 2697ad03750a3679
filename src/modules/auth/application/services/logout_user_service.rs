use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{LogoutCommand, LogoutError, LogoutUseCase},
        outgoing::{TokenProvider, TokenRepository, TokenRepositoryError},
    },
};

use super::token_hasher::hash_token;

pub struct LogoutUserService<T>
where
    T: TokenRepository + Send + Sync,
{
    blacklist: T,
    tokens: Arc<dyn TokenProvider>,
}

impl<T> LogoutUserService<T>
where
    T: TokenRepository + Send + Sync,
{
    pub fn new(blacklist: T, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { blacklist, tokens }
    }
}

#[async_trait]
impl<T> LogoutUseCase for LogoutUserService<T>
where
    T: TokenRepository + Send + Sync,
{
    async fn execute(&self, command: LogoutCommand) -> Result<(), LogoutError> {
        let claims = self
            .tokens
            .verify_refresh_token(command.refresh_token.trim())
            .map_err(|_| LogoutError::InvalidToken)?;

        if UserId::from(claims.sub) != command.user_id {
            return Err(LogoutError::TokenOwnerMismatch);
        }

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(LogoutError::InvalidToken)?;

        match self
            .blacklist
            .blacklist_token(hash_token(command.refresh_token.trim()), command.user_id, expires_at)
            .await
        {
            Ok(()) => {}
            // Expired tokens are already unusable.
            Err(TokenRepositoryError::TokenExpired) => {}
            Err(e) => return Err(LogoutError::RepositoryError(e.to_string())),
        }

        tracing::info!(user_id = %command.user_id, "User logged out");
        Ok(())
    }
}
