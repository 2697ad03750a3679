use async_trait::async_trait;

use crate::course::application::{
    domain::entities::{CourseAccess, CourseId},
    ports::{
        incoming::use_cases::{DeleteCourseError, DeleteCourseUseCase},
        outgoing::{CourseQuery, CourseRepository, CourseRepositoryError},
    },
};

/// Deletes a course and, through FK cascades, its enrollments, progress,
/// reviews and certificates.
pub struct DeleteCourseService<R, Q>
where
    R: CourseRepository + Send + Sync,
    Q: CourseQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteCourseService<R, Q>
where
    R: CourseRepository + Send + Sync,
    Q: CourseQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteCourseUseCase for DeleteCourseService<R, Q>
where
    R: CourseRepository + Send + Sync,
    Q: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        course_id: CourseId,
        access: CourseAccess,
    ) -> Result<(), DeleteCourseError> {
        self.query
            .find_by_id(course_id)
            .await
            .map_err(|e| DeleteCourseError::RepositoryError(e.to_string()))?
            .filter(|c| access.permits(c))
            .ok_or(DeleteCourseError::CourseNotFound)?;

        self.repository
            .delete(course_id)
            .await
            .map_err(|e| match e {
                CourseRepositoryError::NotFound => DeleteCourseError::CourseNotFound,
                other => DeleteCourseError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(course_id = %course_id, ?access, "Course deleted");
        Ok(())
    }
}
