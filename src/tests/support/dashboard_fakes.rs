use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::auth::application::domain::entities::UserId;
use crate::dashboard::application::{
    domain::entities::{CoursePerformance, PlatformStats},
    ports::outgoing::{DashboardQuery, DashboardQueryError, InstructorTotals, MonthCount},
};

/// Canned aggregates; records the trend window it was asked for.
#[derive(Clone, Default)]
pub struct FakeDashboardQuery {
    pub totals: InstructorTotals,
    pub monthly: Vec<MonthCount>,
    pub top: Vec<CoursePerformance>,
    pub platform: PlatformStats,
    pub fail: bool,
    pub(crate) since: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl FakeDashboardQuery {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn since(&self) -> Option<DateTime<Utc>> {
        *self.since.lock().unwrap()
    }

    fn check(&self) -> Result<(), DashboardQueryError> {
        if self.fail {
            return Err(DashboardQueryError::DatabaseError("boom".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardQuery for FakeDashboardQuery {
    async fn instructor_totals(
        &self,
        _instructor_id: UserId,
    ) -> Result<InstructorTotals, DashboardQueryError> {
        self.check()?;
        Ok(self.totals.clone())
    }

    async fn monthly_enrollments(
        &self,
        _instructor_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<MonthCount>, DashboardQueryError> {
        self.check()?;
        *self.since.lock().unwrap() = Some(since);
        Ok(self.monthly.clone())
    }

    async fn top_courses(
        &self,
        _instructor_id: UserId,
        limit: u64,
    ) -> Result<Vec<CoursePerformance>, DashboardQueryError> {
        self.check()?;
        Ok(self.top.iter().take(limit as usize).cloned().collect())
    }

    async fn platform_stats(&self) -> Result<PlatformStats, DashboardQueryError> {
        self.check()?;
        Ok(self.platform.clone())
    }
}
