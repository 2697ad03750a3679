use async_trait::async_trait;

use crate::auth::application::domain::entities::{
    InstructorStatus, UserId, UserProfile, UserRole,
};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub instructor_status: Option<InstructorStatus>,
}

/// Partial profile update.
///
/// Outer `None` leaves a field untouched; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileData {
    pub name: Option<String>,
    pub headline: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub linkedin: Option<Option<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserProfile, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<UserProfile, UserRepositoryError>;

    async fn set_instructor_status(
        &self,
        user_id: UserId,
        status: InstructorStatus,
    ) -> Result<UserProfile, UserRepositoryError>;

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
