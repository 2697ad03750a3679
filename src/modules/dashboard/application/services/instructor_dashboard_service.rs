use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::dashboard::application::{
    domain::entities::{
        round_one_decimal, trend_months, InstructorDashboard, MonthlyEnrollments, TOP_COURSES,
    },
    ports::{
        incoming::use_cases::{GetInstructorDashboardError, GetInstructorDashboardUseCase},
        outgoing::{DashboardQuery, MonthCount},
    },
};

pub struct InstructorDashboardService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    query: Q,
}

impl<Q> InstructorDashboardService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn build(
        &self,
        instructor_id: UserId,
        today: NaiveDate,
    ) -> Result<InstructorDashboard, GetInstructorDashboardError> {
        let months = trend_months(today);
        let since = months
            .first()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .ok_or_else(|| GetInstructorDashboardError::QueryError("empty trend window".into()))?;

        let (totals, monthly, top) = futures::try_join!(
            self.query.instructor_totals(instructor_id),
            self.query.monthly_enrollments(instructor_id, since),
            self.query.top_courses(instructor_id, TOP_COURSES),
        )
        .map_err(|e| GetInstructorDashboardError::QueryError(e.to_string()))?;

        let enrollment_trend = months
            .iter()
            .map(|month| MonthlyEnrollments {
                name: month.format("%b").to_string(),
                enrollments: count_for(&monthly, month),
            })
            .collect();

        Ok(InstructorDashboard {
            total_students: totals.total_students,
            total_revenue_cents: totals.total_revenue_cents,
            active_courses: totals.active_courses,
            average_rating: totals.average_rating.map(round_one_decimal).unwrap_or(0.0),
            total_reviews: totals.total_reviews,
            enrollment_trend,
            course_performance: top,
        })
    }
}

fn count_for(monthly: &[MonthCount], month: &NaiveDate) -> i64 {
    monthly
        .iter()
        .filter(|m| m.year == month.year() && m.month == month.month())
        .map(|m| m.enrollments)
        .sum()
}

#[async_trait]
impl<Q> GetInstructorDashboardUseCase for InstructorDashboardService<Q>
where
    Q: DashboardQuery + Send + Sync,
{
    async fn execute(
        &self,
        instructor_id: UserId,
    ) -> Result<InstructorDashboard, GetInstructorDashboardError> {
        let dashboard = self.build(instructor_id, Utc::now().date_naive()).await?;
        tracing::info!(instructor_id = %instructor_id, "Instructor dashboard built");
        Ok(dashboard)
    }
}
