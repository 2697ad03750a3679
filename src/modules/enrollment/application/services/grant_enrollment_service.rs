use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::course::application::ports::outgoing::CourseQuery;
use crate::email::application::ports::outgoing::{EnrollmentNotice, EnrollmentNotifier};
use crate::enrollment::application::ports::{
    incoming::use_cases::{
        GrantEnrollmentCommand, GrantEnrollmentError, GrantEnrollmentUseCase, GrantOutcome,
    },
    outgoing::{EnrollmentQuery, EnrollmentRepository, EnrollmentRepositoryError, NewEnrollment},
};

/// Idempotent enrollment. The unique (user, course) index decides races; the
/// losing insert returns the stored enrollment with `created = false`.
pub struct GrantEnrollmentService<R, E, C, U>
where
    R: EnrollmentRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    repository: R,
    enrollments: E,
    courses: C,
    users: U,
    notifier: Arc<dyn EnrollmentNotifier + Send + Sync>,
}

impl<R, E, C, U> GrantEnrollmentService<R, E, C, U>
where
    R: EnrollmentRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(
        repository: R,
        enrollments: E,
        courses: C,
        users: U,
        notifier: Arc<dyn EnrollmentNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            enrollments,
            courses,
            users,
            notifier,
        }
    }

    async fn send_confirmation(&self, command: &GrantEnrollmentCommand, course_title: String) {
        let profile = match self.users.find_by_id(command.user_id()).await {
            Ok(Some(profile)) => profile,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load student for enrollment email");
                return;
            }
        };

        let notice = EnrollmentNotice {
            student_name: profile.name,
            student_email: profile.email,
            course_title,
            course_id: command.course_id().value(),
        };

        if let Err(e) = self.notifier.enrollment_confirmed(notice).await {
            tracing::warn!(
                error = %e,
                user_id = %command.user_id(),
                course_id = %command.course_id(),
                "Enrollment confirmation email failed"
            );
        }
    }
}

#[async_trait]
impl<R, E, C, U> GrantEnrollmentUseCase for GrantEnrollmentService<R, E, C, U>
where
    R: EnrollmentRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: GrantEnrollmentCommand,
    ) -> Result<GrantOutcome, GrantEnrollmentError> {
        let course = self
            .courses
            .find_by_id(command.course_id())
            .await
            .map_err(|e| GrantEnrollmentError::RepositoryError(e.to_string()))?
            .ok_or(GrantEnrollmentError::CourseNotFound)?;

        let data = NewEnrollment {
            user_id: command.user_id(),
            course_id: command.course_id(),
            payment_reference: command.payment_reference().map(str::to_string),
        };

        match self.repository.create(data).await {
            Ok(enrollment) => {
                tracing::info!(
                    enrollment_id = %enrollment.id,
                    user_id = %enrollment.user_id,
                    course_id = %enrollment.course_id,
                    "Enrollment granted"
                );
                self.send_confirmation(&command, course.title).await;
                Ok(GrantOutcome {
                    enrollment,
                    created: true,
                })
            }
            Err(EnrollmentRepositoryError::AlreadyEnrolled) => {
                let existing = self
                    .enrollments
                    .find(command.user_id(), command.course_id())
                    .await
                    .map_err(|e| GrantEnrollmentError::RepositoryError(e.to_string()))?
                    .ok_or_else(|| {
                        GrantEnrollmentError::RepositoryError(
                            "enrollment vanished after unique violation".to_string(),
                        )
                    })?;
                Ok(GrantOutcome {
                    enrollment: existing,
                    created: false,
                })
            }
            Err(e) => Err(GrantEnrollmentError::RepositoryError(e.to_string())),
        }
    }
}
