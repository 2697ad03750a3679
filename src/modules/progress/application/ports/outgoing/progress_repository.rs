use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    progress::application::domain::entities::Progress,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Progress>, ProgressRepositoryError>;

    /// Inserts or replaces the record for the user and course.
    async fn save(&self, progress: Progress) -> Result<Progress, ProgressRepositoryError>;

    /// Flips one lesson and recomputes the percent against `course_lessons`
    /// while holding the record's row lock. Creates the record when missing.
    /// Returns the stored record and whether the lesson is now completed.
    async fn toggle_lesson(
        &self,
        user_id: UserId,
        course_id: CourseId,
        lesson_id: Uuid,
        course_lessons: &HashSet<Uuid>,
    ) -> Result<(Progress, bool), ProgressRepositoryError>;
}
