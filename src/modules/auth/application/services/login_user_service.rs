use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{AuthSession, LoginCommand, LoginError, LoginUserUseCase},
    outgoing::{HashError, PasswordHasher, TokenProvider, UserQuery},
};

use super::session::issue_session;

pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError> {
        let credentials = self
            .query
            .find_credentials_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = match self
            .hasher
            .verify_password(command.password(), &credentials.password_hash)
            .await
        {
            Ok(matches) => matches,
            // A stored hash we cannot parse is treated as a failed login.
            Err(HashError::VerifyFailed) => false,
            Err(e) => return Err(LoginError::HashingFailed(e.to_string())),
        };

        if !matches {
            tracing::warn!(email = command.email(), "Login rejected: bad credentials");
            return Err(LoginError::InvalidCredentials);
        }

        issue_session(self.tokens.as_ref(), credentials.profile)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::auth_fakes::{
        sample_profile, FakePasswordHasher, FakeUserQuery, StubTokenProvider,
    };

    fn login(email: &str, password: &str) -> LoginCommand {
        LoginCommand::new(email.to_string(), password.to_string()).unwrap()
    }

    fn service(query: FakeUserQuery) -> LoginUserService<FakeUserQuery> {
        LoginUserService::new(
            query,
            Arc::new(FakePasswordHasher::default()),
            Arc::new(StubTokenProvider::anonymous()),
        )
    }

    #[tokio::test]
    async fn valid_credentials_return_session() {
        // Arrange
        let profile = sample_profile(UserRole::Instructor);
        let email = profile.email.clone();
        let query = FakeUserQuery::default().with_user(profile.clone(), "hashed:secret-pass");

        // Act
        let session = service(query).execute(login(&email, "secret-pass")).await.unwrap();

        // Assert
        assert_eq!(session.user.id, profile.id);
        assert_eq!(session.user.role, UserRole::Instructor);
        assert_eq!(session.expires_in, 1800);
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let result = service(FakeUserQuery::default())
            .execute(login("ghost@example.com", "whatever"))
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let profile = sample_profile(UserRole::User);
        let email = profile.email.clone();
        let query = FakeUserQuery::default().with_user(profile, "hashed:secret-pass");

        let result = service(query).execute(login(&email, "nope")).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn query_failure_is_propagated() {
        let result = service(FakeUserQuery::failing())
            .execute(login("a@example.com", "pw"))
            .await;

        assert!(matches!(result, Err(LoginError::QueryError(_))));
    }
}
