use async_trait::async_trait;

use crate::dashboard::application::{
    domain::entities::PlatformStats,
    ports::{
        incoming::use_cases::{GetPlatformStatsError, GetPlatformStatsUseCase},
        outgoing::DashboardQuery,
    },
};

pub struct PlatformStatsService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    query: Q,
}

impl<Q> PlatformStatsService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPlatformStatsUseCase for PlatformStatsService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    async fn execute(&self) -> Result<PlatformStats, GetPlatformStatsError> {
        self.query
            .platform_stats()
            .await
            .map_err(|e| GetPlatformStatsError::QueryError(e.to_string()))
    }
}
