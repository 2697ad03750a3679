use async_trait::async_trait;
use serde::Serialize;

use crate::{
    auth::application::domain::entities::UserId,
    certificate::application::domain::entities::Certificate,
    course::application::domain::entities::CourseId,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IssuedCertificate {
    pub certificate: Certificate,
    /// False when the certificate already existed.
    pub created: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueCertificateError {
    #[error("You are not enrolled in this course")]
    NotEnrolled,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Course is not completed yet")]
    CourseNotCompleted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IssueCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<IssuedCertificate, IssueCertificateError>;
}
