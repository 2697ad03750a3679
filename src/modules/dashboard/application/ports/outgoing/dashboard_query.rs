use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::dashboard::application::domain::entities::{CoursePerformance, PlatformStats};

/// Aggregates over one instructor's courses; revenue counts active enrollments only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstructorTotals {
    pub total_students: i64,
    pub total_revenue_cents: i64,
    pub active_courses: i64,
    /// Mean of course ratings over courses that have at least one review.
    pub average_rating: Option<f64>,
    pub total_reviews: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthCount {
    pub year: i32,
    pub month: u32,
    pub enrollments: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn instructor_totals(&self, instructor_id: UserId)
        -> Result<InstructorTotals, DashboardQueryError>;

    /// Active enrollments per calendar month (UTC) since `since`.
    async fn monthly_enrollments(
        &self,
        instructor_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<MonthCount>, DashboardQueryError>;

    /// Highest revenue first.
    async fn top_courses(
        &self,
        instructor_id: UserId,
        limit: u64,
    ) -> Result<Vec<CoursePerformance>, DashboardQueryError>;

    async fn platform_stats(&self) -> Result<PlatformStats, DashboardQueryError>;
}
