use async_trait::async_trait;

use crate::enrollment::application::domain::entities::EnrollmentOverview;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAllEnrollmentsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListAllEnrollmentsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EnrollmentOverview>, ListAllEnrollmentsError>;
}
