use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: Uuid,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseReview {
    #[serde(flatten)]
    pub review: Review,
    pub reviewer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorReview {
    #[serde(flatten)]
    pub review: Review,
    pub reviewer_name: String,
    pub course_title: String,
}

/// Aggregate stored on the course row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub rating: f64,
    pub rating_count: i32,
}

impl RatingSummary {
    /// Average rounded to one decimal; zero when there are no reviews.
    pub fn from_average(average: f64, count: i64) -> Self {
        if count <= 0 {
            return Self {
                rating: 0.0,
                rating_count: 0,
            };
        }
        Self {
            rating: (average * 10.0).round() / 10.0,
            rating_count: count as i32,
        }
    }
}
