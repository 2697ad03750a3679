use async_trait::async_trait;

use crate::course::application::domain::entities::{CourseCard, CourseStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAllCoursesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListAllCoursesUseCase: Send + Sync {
    async fn execute(
        &self,
        status: Option<CourseStatus>,
    ) -> Result<Vec<CourseCard>, ListAllCoursesError>;
}
