use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    certificate::application::domain::entities::Certificate,
    course::application::domain::entities::CourseId,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCertificateError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Certificate, GetCertificateError>;
}
