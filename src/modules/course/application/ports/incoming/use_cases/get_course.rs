use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::{UserId, UserRole},
    course::application::domain::entities::{CourseDetails, CourseId},
};

/// The caller of a course page, when signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseViewer {
    pub user_id: UserId,
    pub role: UserRole,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCourseError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: CourseId,
        viewer: Option<CourseViewer>,
    ) -> Result<CourseDetails, GetCourseError>;
}
