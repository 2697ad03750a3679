use async_trait::async_trait;

use crate::category::application::ports::outgoing::CategoryQuery;
use crate::course::application::{
    domain::entities::Course,
    ports::{
        incoming::use_cases::{UpdateCourseCommand, UpdateCourseError, UpdateCourseUseCase},
        outgoing::{CourseQuery, CourseRepository, CourseRepositoryError},
    },
};

/// Owner-only partial update. Courses owned by someone else read as missing.
pub struct UpdateCourseService<R, Q, C>
where
    R: CourseRepository + Send + Sync,
    Q: CourseQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    repository: R,
    query: Q,
    categories: C,
}

impl<R, Q, C> UpdateCourseService<R, Q, C>
where
    R: CourseRepository + Send + Sync,
    Q: CourseQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q, categories: C) -> Self {
        Self {
            repository,
            query,
            categories,
        }
    }
}

#[async_trait]
impl<R, Q, C> UpdateCourseUseCase for UpdateCourseService<R, Q, C>
where
    R: CourseRepository + Send + Sync,
    Q: CourseQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn execute(&self, command: UpdateCourseCommand) -> Result<Course, UpdateCourseError> {
        let course = self
            .query
            .find_by_id(command.course_id())
            .await
            .map_err(|e| UpdateCourseError::RepositoryError(e.to_string()))?
            .filter(|c| c.is_owned_by(command.instructor_id()))
            .ok_or(UpdateCourseError::CourseNotFound)?;

        if let Some(category) = &command.changes().category {
            let exists = self
                .categories
                .exists_by_name(category)
                .await
                .map_err(|e| UpdateCourseError::RepositoryError(e.to_string()))?;
            if !exists {
                return Err(UpdateCourseError::CategoryNotFound(category.clone()));
            }
        }

        let updated = self
            .repository
            .update(course.id, command.into_changes())
            .await
            .map_err(|e| match e {
                CourseRepositoryError::NotFound => UpdateCourseError::CourseNotFound,
                other => UpdateCourseError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(course_id = %updated.id, "Course updated");
        Ok(updated)
    }
}
