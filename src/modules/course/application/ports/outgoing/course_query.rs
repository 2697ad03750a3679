use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::{
        Course, CourseCard, CourseId, CourseLevel, CourseRecord, CourseStatus,
    },
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CourseQuery: Send + Sync {
    async fn find_by_id(&self, course_id: CourseId) -> Result<Option<Course>, CourseQueryError>;

    async fn find_record(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseRecord>, CourseQueryError>;

    /// Published courses only, newest first.
    async fn list_published(
        &self,
        filter: CourseFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseCard>, CourseQueryError>;

    async fn list_by_instructor(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<CourseCard>, CourseQueryError>;

    async fn list_all(
        &self,
        status: Option<CourseStatus>,
    ) -> Result<Vec<CourseCard>, CourseQueryError>;
}
