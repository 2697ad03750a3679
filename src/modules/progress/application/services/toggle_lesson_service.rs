use async_trait::async_trait;

use crate::course::application::ports::outgoing::CourseQuery;
use crate::enrollment::application::ports::outgoing::EnrollmentQuery;
use crate::progress::application::{
    domain::entities::Progress,
    ports::{
        incoming::use_cases::{ToggleLessonCommand, ToggleLessonError, ToggleLessonUseCase},
        outgoing::ProgressRepository,
    },
};

pub struct ToggleLessonService<R, E, C>
where
    R: ProgressRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    repository: R,
    enrollments: E,
    courses: C,
}

impl<R, E, C> ToggleLessonService<R, E, C>
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
impl<R, E, C> ToggleLessonUseCase for ToggleLessonService<R, E, C>
where
    R: ProgressRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    async fn execute(&self, command: ToggleLessonCommand) -> Result<Progress, ToggleLessonError> {
        let (user_id, course_id) = (command.user_id(), command.course_id());

        let enrolled = self
            .enrollments
            .is_enrolled(user_id, course_id)
            .await
            .map_err(|e| ToggleLessonError::RepositoryError(e.to_string()))?;
        if !enrolled {
            return Err(ToggleLessonError::NotEnrolled);
        }

        let course = self
            .courses
            .find_by_id(course_id)
            .await
            .map_err(|e| ToggleLessonError::RepositoryError(e.to_string()))?
            .ok_or(ToggleLessonError::CourseNotFound)?;

        if !course.has_lesson(command.lesson_id()) {
            return Err(ToggleLessonError::UnknownLesson);
        }

        let (saved, completed) = self
            .repository
            .toggle_lesson(user_id, course_id, command.lesson_id(), &course.lesson_ids())
            .await
            .map_err(|e| ToggleLessonError::RepositoryError(e.to_string()))?;

        tracing::info!(
            user_id = %user_id,
            course_id = %course_id,
            lesson_id = %command.lesson_id(),
            completed,
            percent = saved.percent,
            "Lesson progress toggled"
        );

        Ok(saved)
    }
}
