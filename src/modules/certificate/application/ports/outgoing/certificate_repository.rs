use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    certificate::application::domain::entities::{Certificate, MyCertificate},
    course::application::domain::entities::CourseId,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewCertificate {
    pub certificate_id: String,
    pub user_id: UserId,
    pub course_id: CourseId,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CertificateRepositoryError {
    #[error("Certificate already issued")]
    AlreadyIssued,

    #[error("Certificate id already taken")]
    IdCollision,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Certificate>, CertificateRepositoryError>;

    /// Fails with `AlreadyIssued` when the user already holds one for the course
    /// and with `IdCollision` when `certificate_id` belongs to another certificate.
    async fn create(&self, data: NewCertificate) -> Result<Certificate, CertificateRepositoryError>;

    /// Newest first.
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<MyCertificate>, CertificateRepositoryError>;
}
