use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::{
        Course, CourseId, CourseLevel, CourseStatus, Section,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub thumbnail: Option<String>,
    pub category: String,
    pub level: CourseLevel,
    pub status: CourseStatus,
    pub instructor_id: UserId,
    pub sections: Vec<Section>,
}

/// Partial update. `Some(None)` clears an optional column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub price_cents: Option<i64>,
    pub thumbnail: Option<Option<String>>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
    pub sections: Option<Vec<Section>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Course not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, data: NewCourse) -> Result<Course, CourseRepositoryError>;

    async fn update(
        &self,
        course_id: CourseId,
        changes: CourseChanges,
    ) -> Result<Course, CourseRepositoryError>;

    async fn delete(&self, course_id: CourseId) -> Result<(), CourseRepositoryError>;
}
