use async_trait::async_trait;

use crate::course::application::{
    domain::entities::{Course, CourseId, CourseStatus},
    ports::{
        incoming::use_cases::{SetCourseStatusError, SetCourseStatusUseCase},
        outgoing::{CourseChanges, CourseRepository, CourseRepositoryError},
    },
};

pub struct SetCourseStatusService<R>
where
    R: CourseRepository + Send + Sync,
{
    repository: R,
}

impl<R> SetCourseStatusService<R>
where
    R: CourseRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetCourseStatusUseCase for SetCourseStatusService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        course_id: CourseId,
        status: CourseStatus,
    ) -> Result<Course, SetCourseStatusError> {
        let changes = CourseChanges {
            status: Some(status),
            ..Default::default()
        };

        let course = self
            .repository
            .update(course_id, changes)
            .await
            .map_err(|e| match e {
                CourseRepositoryError::NotFound => SetCourseStatusError::CourseNotFound,
                other => SetCourseStatusError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(course_id = %course_id, status = status.as_str(), "Course status changed");
        Ok(course)
    }
}
