use async_trait::async_trait;
use serde::Serialize;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    enrollment::application::domain::entities::Enrollment,
};

/// Grants access to a course. Used by free enrollment and by completed payments.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantEnrollmentCommand {
    user_id: UserId,
    course_id: CourseId,
    payment_reference: Option<String>,
}

impl GrantEnrollmentCommand {
    pub fn new(user_id: UserId, course_id: CourseId, payment_reference: Option<String>) -> Self {
        Self {
            user_id,
            course_id,
            payment_reference: payment_reference.filter(|r| !r.trim().is_empty()),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn payment_reference(&self) -> Option<&str> {
        self.payment_reference.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrantOutcome {
    pub enrollment: Enrollment,
    /// False when the user already held an enrollment.
    pub created: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GrantEnrollmentError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GrantEnrollmentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: GrantEnrollmentCommand,
    ) -> Result<GrantOutcome, GrantEnrollmentError>;
}
