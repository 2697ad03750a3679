use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::certificate::application::{
    domain::entities::{Certificate, MyCertificate},
    ports::outgoing::{CertificateRepository, CertificateRepositoryError, NewCertificate},
};
use crate::course::application::domain::entities::CourseId;

pub fn sample_certificate(user_id: UserId, course_id: CourseId) -> Certificate {
    Certificate {
        id: Uuid::new_v4(),
        certificate_id: "CERT-0A1B2C3D".to_string(),
        user_id,
        course_id,
        issued_at: Utc::now(),
    }
}

/// In-memory certificates table.
///
/// `racing()` stores a certificate for the pair and then reports a unique
/// violation on `create`, as a concurrent issuer would cause. `colliding(n)`
/// rejects the first `n` creates as if their public id were already taken.
#[derive(Clone, Default)]
pub struct FakeCertificateStore {
    certificates: Arc<Mutex<Vec<Certificate>>>,
    hidden: Arc<Mutex<Option<Certificate>>>,
    collisions: Arc<Mutex<usize>>,
    attempts: Arc<Mutex<usize>>,
    fail: bool,
}

impl FakeCertificateStore {
    pub fn with_certificate(certificate: Certificate) -> Self {
        let store = Self::default();
        store.certificates.lock().unwrap().push(certificate);
        store
    }

    pub fn racing(user_id: UserId, course_id: CourseId) -> Self {
        let store = Self::default();
        *store.hidden.lock().unwrap() = Some(sample_certificate(user_id, course_id));
        store
    }

    pub fn colliding(times: usize) -> Self {
        let store = Self::default();
        *store.collisions.lock().unwrap() = times;
        store
    }

    pub fn create_attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn certificates(&self) -> Vec<Certificate> {
        self.certificates.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), CertificateRepositoryError> {
        if self.fail {
            return Err(CertificateRepositoryError::DatabaseError("boom".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CertificateRepository for FakeCertificateStore {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Certificate>, CertificateRepositoryError> {
        self.check()?;
        Ok(self
            .certificates
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user_id == user_id && c.course_id == course_id)
            .cloned())
    }

    async fn create(&self, data: NewCertificate) -> Result<Certificate, CertificateRepositoryError> {
        self.check()?;
        *self.attempts.lock().unwrap() += 1;
        {
            let mut collisions = self.collisions.lock().unwrap();
            if *collisions > 0 {
                *collisions -= 1;
                return Err(CertificateRepositoryError::IdCollision);
            }
        }
        if let Some(raced) = self.hidden.lock().unwrap().take() {
            self.certificates.lock().unwrap().push(raced);
            return Err(CertificateRepositoryError::AlreadyIssued);
        }

        let mut certificates = self.certificates.lock().unwrap();
        if certificates
            .iter()
            .any(|c| c.user_id == data.user_id && c.course_id == data.course_id)
        {
            return Err(CertificateRepositoryError::AlreadyIssued);
        }

        let certificate = Certificate {
            id: Uuid::new_v4(),
            certificate_id: data.certificate_id,
            user_id: data.user_id,
            course_id: data.course_id,
            issued_at: Utc::now(),
        };
        certificates.push(certificate.clone());
        Ok(certificate)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<MyCertificate>, CertificateRepositoryError> {
        self.check()?;
        Ok(self
            .certificates
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| MyCertificate {
                certificate: c.clone(),
                course_title: "Rust for Beginners".to_string(),
                course_thumbnail: None,
            })
            .collect())
    }
}
