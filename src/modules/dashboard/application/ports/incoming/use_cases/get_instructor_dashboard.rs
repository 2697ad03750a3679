use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::dashboard::application::domain::entities::InstructorDashboard;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetInstructorDashboardError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetInstructorDashboardUseCase: Send + Sync {
    async fn execute(
        &self,
        instructor_id: UserId,
    ) -> Result<InstructorDashboard, GetInstructorDashboardError>;
}
