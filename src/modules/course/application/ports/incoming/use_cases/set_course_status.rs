use async_trait::async_trait;

use crate::course::application::domain::entities::{Course, CourseId, CourseStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetCourseStatusError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetCourseStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: CourseId,
        status: CourseStatus,
    ) -> Result<Course, SetCourseStatusError>;
}
