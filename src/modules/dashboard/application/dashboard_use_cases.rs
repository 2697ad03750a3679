use std::sync::Arc;

use crate::dashboard::application::ports::incoming::use_cases::{
    GetInstructorDashboardUseCase, GetPlatformStatsUseCase,
};

#[derive(Clone)]
pub struct DashboardUseCases {
    pub instructor: Arc<dyn GetInstructorDashboardUseCase + Send + Sync>,
    pub platform: Arc<dyn GetPlatformStatsUseCase + Send + Sync>,
}
