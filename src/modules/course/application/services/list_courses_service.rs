use async_trait::async_trait;

use crate::course::application::{
    domain::entities::CourseCard,
    ports::{
        incoming::use_cases::{ListCoursesError, ListCoursesUseCase},
        outgoing::{CourseFilter, CourseQuery},
    },
};
use crate::shared::pagination::{PageRequest, PageResult};

/// Catalog listing. The `All` category and blank values mean "no filter".
pub struct ListCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn normalize(filter: CourseFilter) -> CourseFilter {
    let non_blank = |v: Option<String>| {
        v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
    };

    CourseFilter {
        search: non_blank(filter.search),
        category: non_blank(filter.category).filter(|c| !c.eq_ignore_ascii_case("all")),
        level: filter.level,
    }
}

#[async_trait]
impl<Q> ListCoursesUseCase for ListCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: CourseFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseCard>, ListCoursesError> {
        self.query
            .list_published(normalize(filter), page)
            .await
            .map_err(|e| ListCoursesError::QueryError(e.to_string()))
    }
}
