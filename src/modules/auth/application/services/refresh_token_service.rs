use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{RefreshTokenError, RefreshTokenUseCase, RefreshedToken},
        outgoing::{TokenProvider, TokenRepository, UserQuery},
    },
};

use super::{session::TOKEN_TYPE_BEARER, token_hasher::hash_token};

/// Exchanges a refresh token for a new access token.
///
/// The role is re-read from the store so that role or approval changes apply on refresh.
pub struct RefreshTokenService<Q, T>
where
    Q: UserQuery + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    query: Q,
    blacklist: T,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q, T> RefreshTokenService<Q, T>
where
    Q: UserQuery + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    pub fn new(query: Q, blacklist: T, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            blacklist,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, T> RefreshTokenUseCase for RefreshTokenService<Q, T>
where
    Q: UserQuery + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<RefreshedToken, RefreshTokenError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenError::MissingToken);
        }

        let claims = self
            .tokens
            .verify_refresh_token(refresh_token)
            .map_err(|_| RefreshTokenError::InvalidToken)?;

        let revoked = self
            .blacklist
            .is_token_blacklisted(&hash_token(refresh_token))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;
        if revoked {
            tracing::warn!(user_id = %claims.sub, "Blacklisted refresh token presented");
            return Err(RefreshTokenError::TokenRevoked);
        }

        let user = self
            .query
            .find_by_id(UserId::from(claims.sub))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?
            .ok_or(RefreshTokenError::UserNotFound)?;

        let access_token = self
            .tokens
            .generate_access_token(user.id.value(), user.role)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshedToken {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.tokens.access_token_ttl(),
        })
    }
}
