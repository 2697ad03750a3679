use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::outgoing::CourseQuery;
use crate::enrollment::application::ports::outgoing::EnrollmentQuery;
use crate::progress::application::{
    domain::entities::Progress,
    ports::{
        incoming::use_cases::{GetProgressError, GetProgressUseCase},
        outgoing::ProgressRepository,
    },
};

pub struct GetProgressService<R, E, C>
where
    R: ProgressRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    repository: R,
    enrollments: E,
    courses: C,
}

impl<R, E, C> GetProgressService<R, E, C>
where
    R: ProgressRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    pub fn new(repository: R, enrollments: E, courses: C) -> Self {
        Self {
            repository,
            enrollments,
            courses,
        }
    }
}

#[async_trait]
impl<R, E, C> GetProgressUseCase for GetProgressService<R, E, C>
where
    R: ProgressRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Progress, GetProgressError> {
        let enrolled = self
            .enrollments
            .is_enrolled(user_id, course_id)
            .await
            .map_err(|e| GetProgressError::RepositoryError(e.to_string()))?;
        if !enrolled {
            return Err(GetProgressError::NotEnrolled);
        }

        let course = self
            .courses
            .find_by_id(course_id)
            .await
            .map_err(|e| GetProgressError::RepositoryError(e.to_string()))?
            .ok_or(GetProgressError::CourseNotFound)?;

        let existing = self
            .repository
            .find(user_id, course_id)
            .await
            .map_err(|e| GetProgressError::RepositoryError(e.to_string()))?;

        let mut progress = match existing {
            Some(progress) => progress,
            None => self
                .repository
                .save(Progress::empty(user_id, course_id))
                .await
                .map_err(|e| GetProgressError::RepositoryError(e.to_string()))?,
        };

        // Lessons may have changed since the last toggle.
        progress.recompute(&course.lesson_ids());
        Ok(progress)
    }
}
