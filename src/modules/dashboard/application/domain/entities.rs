use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Number of calendar months shown in the enrollment trend.
pub const TREND_MONTHS: u32 = 6;

/// Courses listed in the revenue ranking.
pub const TOP_COURSES: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyEnrollments {
    pub name: String,
    pub enrollments: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoursePerformance {
    pub name: String,
    pub revenue_cents: i64,
    pub students: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorDashboard {
    pub total_students: i64,
    pub total_revenue_cents: i64,
    pub active_courses: i64,
    pub average_rating: f64,
    pub total_reviews: i64,
    pub enrollment_trend: Vec<MonthlyEnrollments>,
    pub course_performance: Vec<CoursePerformance>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlatformStats {
    pub users: i64,
    pub courses: i64,
    pub enrollments: i64,
    pub revenue_cents: i64,
}

/// First day of each of the last `TREND_MONTHS` months, oldest first, ending with `today`'s month.
pub fn trend_months(today: NaiveDate) -> Vec<NaiveDate> {
    let current = today.year() * 12 + today.month0() as i32;
    (0..TREND_MONTHS as i32)
        .rev()
        .filter_map(|back| {
            let index = current - back;
            NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
        })
        .collect()
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
