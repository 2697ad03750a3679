use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{InstructorStatus, UserId, UserProfile, UserRole},
    ports::{
        incoming::use_cases::{SetInstructorStatusError, SetInstructorStatusUseCase},
        outgoing::{UserQuery, UserRepository, UserRepositoryError},
    },
};

pub struct SetInstructorStatusService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> SetInstructorStatusService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> SetInstructorStatusUseCase for SetInstructorStatusService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        status: InstructorStatus,
    ) -> Result<UserProfile, SetInstructorStatusError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| SetInstructorStatusError::RepositoryError(e.to_string()))?
            .ok_or(SetInstructorStatusError::UserNotFound)?;

        if user.role != UserRole::Instructor {
            return Err(SetInstructorStatusError::NotAnInstructor);
        }

        let updated = self
            .repository
            .set_instructor_status(user_id, status)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SetInstructorStatusError::UserNotFound,
                other => SetInstructorStatusError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user_id, status = status.as_str(), "Instructor status changed");
        Ok(updated)
    }
}
