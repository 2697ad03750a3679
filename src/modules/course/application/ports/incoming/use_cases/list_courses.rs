use async_trait::async_trait;

use crate::{
    course::application::{domain::entities::CourseCard, ports::outgoing::CourseFilter},
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCoursesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListCoursesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: CourseFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseCard>, ListCoursesError>;
}
