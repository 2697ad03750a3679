use async_trait::async_trait;

use crate::course::application::{
    domain::entities::{CourseCard, CourseStatus},
    ports::{
        incoming::use_cases::{ListAllCoursesError, ListAllCoursesUseCase},
        outgoing::CourseQuery,
    },
};

pub struct ListAllCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListAllCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAllCoursesUseCase for ListAllCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        status: Option<CourseStatus>,
    ) -> Result<Vec<CourseCard>, ListAllCoursesError> {
        self.query
            .list_all(status)
            .await
            .map_err(|e| ListAllCoursesError::QueryError(e.to_string()))
    }
}
