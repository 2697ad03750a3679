use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    enrollment::application::domain::entities::EnrolledStudent,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListInstructorStudentsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListInstructorStudentsUseCase: Send + Sync {
    async fn execute(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<EnrolledStudent>, ListInstructorStudentsError>;
}
