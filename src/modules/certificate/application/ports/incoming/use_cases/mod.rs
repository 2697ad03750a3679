mod get_certificate;
mod issue_certificate;
mod list_my_certificates;

pub use get_certificate::{GetCertificateError, GetCertificateUseCase};
pub use issue_certificate::{IssueCertificateError, IssueCertificateUseCase, IssuedCertificate};
pub use list_my_certificates::{ListMyCertificatesError, ListMyCertificatesUseCase};
