use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::{CourseCard, CourseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(EnrollmentStatus::Active),
            _ => None,
        }
    }
}

/// The record granting a user access to a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub payment_reference: Option<String>,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyCourse {
    pub course: CourseCard,
    pub progress: i32,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrolledStudent {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub course_id: CourseId,
    pub course_title: String,
    pub enrolled_at: DateTime<Utc>,
    pub progress: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollmentOverview {
    pub enrollment_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    pub course_id: CourseId,
    pub course_title: String,
    pub enrolled_at: DateTime<Utc>,
    pub payment_reference: Option<String>,
}
