use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::certificate::application::{
    domain::entities::{Certificate, MyCertificate},
    ports::{
        incoming::use_cases::{
            GetCertificateError, GetCertificateUseCase, ListMyCertificatesError,
            ListMyCertificatesUseCase,
        },
        outgoing::CertificateRepository,
    },
};
use crate::course::application::domain::entities::CourseId;

pub struct GetCertificateService<R>
where
    R: CertificateRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetCertificateService<R>
where
    R: CertificateRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCertificateUseCase for GetCertificateService<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Certificate, GetCertificateError> {
        self.repository
            .find(user_id, course_id)
            .await
            .map_err(|e| GetCertificateError::RepositoryError(e.to_string()))?
            .ok_or(GetCertificateError::NotFound)
    }
}

pub struct ListMyCertificatesService<R>
where
    R: CertificateRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListMyCertificatesService<R>
where
    R: CertificateRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListMyCertificatesUseCase for ListMyCertificatesService<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Vec<MyCertificate>, ListMyCertificatesError> {
        self.repository
            .list_for_user(user_id)
            .await
            .map_err(|e| ListMyCertificatesError::QueryError(e.to_string()))
    }
}
