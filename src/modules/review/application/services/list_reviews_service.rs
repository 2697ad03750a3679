use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::review::application::{
    domain::entities::{CourseReview, InstructorReview},
    ports::{
        incoming::use_cases::{
            ListCourseReviewsError, ListCourseReviewsUseCase, ListInstructorReviewsError,
            ListInstructorReviewsUseCase,
        },
        outgoing::ReviewQuery,
    },
};

pub struct ListCourseReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCourseReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCourseReviewsUseCase for ListCourseReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<CourseReview>, ListCourseReviewsError> {
        self.query
            .list_for_course(course_id)
            .await
            .map_err(|e| ListCourseReviewsError::QueryError(e.to_string()))
    }
}

pub struct ListInstructorReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListInstructorReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListInstructorReviewsUseCase for ListInstructorReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<InstructorReview>, ListInstructorReviewsError> {
        self.query
            .list_for_instructor(instructor_id)
            .await
            .map_err(|e| ListInstructorReviewsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::review_fakes::{sample_review, FakeReviewStore};
    use uuid::Uuid;

    #[tokio::test]
    async fn course_reviews_are_filtered_by_course() {
        let course = CourseId::from(Uuid::new_v4());
        let store = FakeReviewStore::default();
        store.insert(sample_review(UserId::from(Uuid::new_v4()), course, 4));
        store.insert(sample_review(
            UserId::from(Uuid::new_v4()),
            CourseId::from(Uuid::new_v4()),
            1,
        ));

        let reviews = ListCourseReviewsService::new(store).execute(course).await.unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].review.rating, 4);
    }

    #[tokio::test]
    async fn query_errors_are_mapped() {
        let service = ListInstructorReviewsService::new(FakeReviewStore::failing());

        let result = service.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(ListInstructorReviewsError::QueryError(_))));
    }
}
