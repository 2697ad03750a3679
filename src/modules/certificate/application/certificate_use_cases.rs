use std::sync::Arc;

use crate::certificate::application::ports::incoming::use_cases::{
    GetCertificateUseCase, IssueCertificateUseCase, ListMyCertificatesUseCase,
};

#[derive(Clone)]
pub struct CertificateUseCases {
    pub issue: Arc<dyn IssueCertificateUseCase + Send + Sync>,
    pub get: Arc<dyn GetCertificateUseCase + Send + Sync>,
    pub list_mine: Arc<dyn ListMyCertificatesUseCase + Send + Sync>,
}
