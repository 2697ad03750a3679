use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{DeleteUserError, DeleteUserUseCase},
        outgoing::{UserRepository, UserRepositoryError},
    },
};

/// Hard-deletes a user; dependent rows go with it through FK cascades and
/// the ratings of courses they reviewed are recomputed.
pub struct DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, target: UserId) -> Result<(), DeleteUserError> {
        if actor == target {
            return Err(DeleteUserError::CannotDeleteSelf);
        }

        self.repository
            .delete_user(target)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(admin_id = %actor, user_id = %target, "User deleted by admin");
        Ok(())
    }
}
