use actix_web::{get, web, Responder};

use crate::auth::adapter::incoming::web::extractors::{AdminUser, InstructorUser};
use crate::dashboard::application::ports::incoming::use_cases::{
    GetInstructorDashboardError, GetPlatformStatsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/instructor/dashboard")]
pub async fn instructor_dashboard_handler(
    instructor: InstructorUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.instructor.execute(instructor.0.user_id).await {
        Ok(dashboard) => ApiResponse::success(dashboard),
        Err(GetInstructorDashboardError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to build instructor dashboard");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/stats")]
pub async fn platform_stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.dashboard.platform.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetPlatformStatsError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to load platform stats");
            ApiResponse::internal_error()
        }
    }
}
