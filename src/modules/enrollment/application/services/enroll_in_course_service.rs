use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::{domain::entities::CourseId, ports::outgoing::CourseQuery};
use crate::enrollment::application::ports::{
    incoming::use_cases::{
        EnrollInCourseError, EnrollInCourseUseCase, GrantEnrollmentCommand, GrantEnrollmentError,
        GrantEnrollmentUseCase, GrantOutcome,
    },
    outgoing::EnrollmentQuery,
};

/// Direct enrollment. Paid courses go through checkout instead.
pub struct EnrollInCourseService<C, E>
where
    C: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    courses: C,
    enrollments: E,
    grant: Arc<dyn GrantEnrollmentUseCase + Send + Sync>,
}

impl<C, E> EnrollInCourseService<C, E>
where
    C: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    pub fn new(
        courses: C,
        enrollments: E,
        grant: Arc<dyn GrantEnrollmentUseCase + Send + Sync>,
    ) -> Self {
        Self {
            courses,
            enrollments,
            grant,
        }
    }
}

#[async_trait]
impl<C, E> EnrollInCourseUseCase for EnrollInCourseService<C, E>
where
    C: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<GrantOutcome, EnrollInCourseError> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await
            .map_err(|e| EnrollInCourseError::RepositoryError(e.to_string()))?
            .filter(|c| c.is_published())
            .ok_or(EnrollInCourseError::CourseNotFound)?;

        let existing = self
            .enrollments
            .find(user_id, course_id)
            .await
            .map_err(|e| EnrollInCourseError::RepositoryError(e.to_string()))?;
        if let Some(enrollment) = existing {
            return Ok(GrantOutcome {
                enrollment,
                created: false,
            });
        }

        if !course.is_free() {
            return Err(EnrollInCourseError::PaymentRequired);
        }

        self.grant
            .execute(GrantEnrollmentCommand::new(user_id, course_id, None))
            .await
            .map_err(|e| match e {
                GrantEnrollmentError::CourseNotFound => EnrollInCourseError::CourseNotFound,
                GrantEnrollmentError::RepositoryError(e) => EnrollInCourseError::RepositoryError(e),
            })
    }
}
