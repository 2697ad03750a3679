mod instructor_dashboard_service;
mod platform_stats_service;

pub use instructor_dashboard_service::InstructorDashboardService;
pub use platform_stats_service::PlatformStatsService;
