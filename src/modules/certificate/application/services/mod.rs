mod issue_certificate_service;
mod read_certificates_service;

pub use issue_certificate_service::IssueCertificateService;
pub use read_certificates_service::{GetCertificateService, ListMyCertificatesService};
