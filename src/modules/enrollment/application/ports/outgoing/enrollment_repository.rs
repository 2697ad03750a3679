use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    enrollment::application::domain::entities::Enrollment,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewEnrollment {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub payment_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnrollmentRepositoryError {
    #[error("User is already enrolled in this course")]
    AlreadyEnrolled,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn create(&self, data: NewEnrollment) -> Result<Enrollment, EnrollmentRepositoryError>;
}
