use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{InstructorStatus, UserRole},
    ports::{
        incoming::use_cases::{
            AuthSession, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
        },
        outgoing::{CreateUserData, PasswordHasher, TokenProvider, UserRepository, UserRepositoryError},
    },
};

use super::session::issue_session;

pub struct RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthSession, RegisterUserError> {
        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let instructor_status = match command.role() {
            UserRole::Instructor => Some(InstructorStatus::Pending),
            _ => None,
        };

        let data = CreateUserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            password_hash,
            role: command.role(),
            instructor_status,
        };

        let user = self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyRegistered,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(user_id = %user.id, role = user.role.as_str(), "User registered");

        issue_session(self.tokens.as_ref(), user)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_fakes::{
        FakePasswordHasher, FakeUserRepository, StubTokenProvider,
    };

    fn command(role: Option<&str>) -> RegisterUserCommand {
        RegisterUserCommand::new(
            "Aisha".to_string(),
            "aisha@example.com".to_string(),
            "long-enough-password".to_string(),
            role.map(str::to_string),
        )
        .unwrap()
    }

    fn service(repo: FakeUserRepository) -> RegisterUserService<FakeUserRepository> {
        RegisterUserService::new(
            repo,
            Arc::new(FakePasswordHasher::default()),
            Arc::new(StubTokenProvider::anonymous()),
        )
    }

    #[tokio::test]
    async fn registers_user_and_issues_tokens() {
        // Arrange
        let repo = FakeUserRepository::default();
        let service = service(repo.clone());

        // Act
        let session = service.execute(command(None)).await.unwrap();

        // Assert
        assert_eq!(session.user.email, "aisha@example.com");
        assert_eq!(session.token_type, "Bearer");
        assert!(session.access_token.starts_with("access-"));
        assert!(session.refresh_token.starts_with("refresh-"));

        let created = repo.created().expect("user should be created");
        assert_eq!(created.password_hash, "hashed:long-enough-password");
        assert_eq!(created.instructor_status, None);
    }

    #[tokio::test]
    async fn instructor_signup_starts_pending() {
        let repo = FakeUserRepository::default();
        let service = service(repo.clone());

        let session = service.execute(command(Some("instructor"))).await.unwrap();

        assert_eq!(session.user.role, UserRole::Instructor);
        assert_eq!(
            repo.created().unwrap().instructor_status,
            Some(InstructorStatus::Pending)
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_reported() {
        let repo = FakeUserRepository::failing(UserRepositoryError::UserAlreadyExists);
        let service = service(repo);

        let result = service.execute(command(None)).await;

        assert!(matches!(result, Err(RegisterUserError::EmailAlreadyRegistered)));
    }

    #[tokio::test]
    async fn hashing_failure_stops_registration() {
        let repo = FakeUserRepository::default();
        let service = RegisterUserService::new(
            repo.clone(),
            Arc::new(FakePasswordHasher::failing()),
            Arc::new(StubTokenProvider::anonymous()),
        );

        let result = service.execute(command(None)).await;

        assert!(matches!(result, Err(RegisterUserError::HashingFailed(_))));
        assert!(repo.created().is_none());
    }
}
