use async_trait::async_trait;

use crate::enrollment::application::ports::outgoing::EnrollmentQuery;
use crate::review::application::{
    domain::entities::Review,
    ports::{
        incoming::use_cases::{SubmitReviewCommand, SubmitReviewError, SubmitReviewUseCase},
        outgoing::ReviewRepository,
    },
};

pub struct SubmitReviewService<R, E>
where
    R: ReviewRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    repository: R,
    enrollments: E,
}

impl<R, E> SubmitReviewService<R, E>
where
    R: ReviewRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    pub fn new(repository: R, enrollments: E) -> Self {
        Self {
            repository,
            enrollments,
        }
    }
}

#[async_trait]
impl<R, E> SubmitReviewUseCase for SubmitReviewService<R, E>
where
    R: ReviewRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    async fn execute(&self, command: SubmitReviewCommand) -> Result<Review, SubmitReviewError> {
        let enrolled = self
            .enrollments
            .is_enrolled(command.user_id(), command.course_id())
            .await
            .map_err(|e| SubmitReviewError::RepositoryError(e.to_string()))?;
        if !enrolled {
            return Err(SubmitReviewError::NotEnrolled);
        }

        let (review, summary) = self
            .repository
            .upsert(command.into_data())
            .await
            .map_err(|e| SubmitReviewError::RepositoryError(e.to_string()))?;

        tracing::info!(
            review_id = %review.id,
            course_id = %review.course_id,
            rating = summary.rating,
            rating_count = summary.rating_count,
            "Review saved"
        );

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::course::application::domain::entities::CourseId;
    use crate::tests::support::enrollment_fakes::FakeEnrollmentStore;
    use crate::tests::support::review_fakes::FakeReviewStore;
    use uuid::Uuid;

    fn ids() -> (UserId, CourseId) {
        (UserId::from(Uuid::new_v4()), CourseId::from(Uuid::new_v4()))
    }

    #[tokio::test]
    async fn second_review_replaces_first() {
        let (user, course) = ids();
        let store = FakeReviewStore::default();
        let service =
            SubmitReviewService::new(store.clone(), FakeEnrollmentStore::with_enrollment(user, course));

        service
            .execute(SubmitReviewCommand::new(user, course, 2, None).unwrap())
            .await
            .unwrap();
        let review = service
            .execute(SubmitReviewCommand::new(user, course, 5, Some("Better now".into())).unwrap())
            .await
            .unwrap();

        assert_eq!(review.rating, 5);
        assert_eq!(store.reviews().len(), 1);
        assert_eq!(store.reviews()[0].comment, "Better now");
    }

    #[tokio::test]
    async fn requires_enrollment() {
        let (user, course) = ids();
        let store = FakeReviewStore::default();
        let service = SubmitReviewService::new(store.clone(), FakeEnrollmentStore::default());

        let result = service
            .execute(SubmitReviewCommand::new(user, course, 4, None).unwrap())
            .await;

        assert!(matches!(result, Err(SubmitReviewError::NotEnrolled)));
        assert!(store.reviews().is_empty());
    }
}
