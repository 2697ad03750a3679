use async_trait::async_trait;

use crate::dashboard::application::domain::entities::PlatformStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPlatformStatsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetPlatformStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<PlatformStats, GetPlatformStatsError>;
}
