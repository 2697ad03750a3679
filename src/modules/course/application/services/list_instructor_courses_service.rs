use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::{
    domain::entities::CourseCard,
    ports::{
        incoming::use_cases::{ListInstructorCoursesError, ListInstructorCoursesUseCase},
        outgoing::CourseQuery,
    },
};

pub struct ListInstructorCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListInstructorCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListInstructorCoursesUseCase for ListInstructorCoursesService<Q>
where
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<CourseCard>, ListInstructorCoursesError> {
        self.query
            .list_by_instructor(instructor_id)
            .await
            .map_err(|e| ListInstructorCoursesError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::course_fakes::{sample_course, FakeCourseStore};
    use uuid::Uuid;

    #[tokio::test]
    async fn lists_only_own_courses() {
        let me = UserId::from(Uuid::new_v4());
        let store = FakeCourseStore::with_course(sample_course(me));
        store.insert(sample_course(UserId::from(Uuid::new_v4())));
        let service = ListInstructorCoursesService::new(store);

        let cards = service.execute(me).await.unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].instructor_id, me);
    }
}
