mod get_instructor_dashboard;
mod get_platform_stats;

pub use get_instructor_dashboard::{GetInstructorDashboardError, GetInstructorDashboardUseCase};
pub use get_platform_stats::{GetPlatformStatsError, GetPlatformStatsUseCase};
