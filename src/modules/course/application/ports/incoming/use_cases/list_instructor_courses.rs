use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseCard,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListInstructorCoursesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListInstructorCoursesUseCase: Send + Sync {
    async fn execute(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<CourseCard>, ListInstructorCoursesError>;
}
