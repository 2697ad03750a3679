use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{UserProfile, UserRole};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_NAME_LEN: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
    role: UserRole,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too short")]
    PasswordTooShort,

    #[error("Password too long")]
    PasswordTooLong,

    #[error("Role not allowed for self registration")]
    InvalidRole,
}

impl RegisterUserCommand {
    pub fn new(
        name: String,
        email: String,
        password: String,
        role: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterUserCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(RegisterUserCommandError::NameTooLong);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmail);
        }

        let password_len = password.chars().count();
        if password_len < MIN_PASSWORD_LEN {
            return Err(RegisterUserCommandError::PasswordTooShort);
        }
        if password_len > MAX_PASSWORD_LEN {
            return Err(RegisterUserCommandError::PasswordTooLong);
        }

        let role = match role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            None => UserRole::User,
            Some(raw) => match UserRole::parse(raw) {
                Some(UserRole::Admin) | None => return Err(RegisterUserCommandError::InvalidRole),
                Some(role) => role,
            },
        };

        Ok(Self {
            name: name.to_string(),
            email,
            password,
            role,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Tokens handed out after signup or login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserProfile,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<AuthSession, RegisterUserError>;
}
