use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserProfile,
    ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
        outgoing::{UserRepository, UserRepositoryError},
    },
};

pub struct UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        let user_id = command.user_id();
        self.repository
            .update_profile(user_id, command.into_data())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
