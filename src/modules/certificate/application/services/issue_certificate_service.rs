use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::certificate::application::{
    domain::entities::generate_certificate_id,
    ports::{
        incoming::use_cases::{IssueCertificateError, IssueCertificateUseCase, IssuedCertificate},
        outgoing::{CertificateRepository, CertificateRepositoryError, NewCertificate},
    },
};
use crate::course::application::{domain::entities::CourseId, ports::outgoing::CourseQuery};
use crate::enrollment::application::ports::outgoing::EnrollmentQuery;
use crate::progress::application::{
    domain::entities::compute_percent, ports::outgoing::ProgressRepository,
};

pub struct IssueCertificateService<R, P, E, C>
where
    R: CertificateRepository + Send + Sync,
    P: ProgressRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    repository: R,
    progress: P,
    enrollments: E,
    courses: C,
}

impl<R, P, E, C> IssueCertificateService<R, P, E, C>
where
    R: CertificateRepository + Send + Sync,
    P: ProgressRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    pub fn new(repository: R, progress: P, enrollments: E, courses: C) -> Self {
        Self {
            repository,
            progress,
            enrollments,
            courses,
        }
    }

    /// Completion is measured against the course as it is now.
    async fn completion(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<i32, IssueCertificateError> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await
            .map_err(|e| IssueCertificateError::RepositoryError(e.to_string()))?
            .ok_or(IssueCertificateError::CourseNotFound)?;

        let progress = self
            .progress
            .find(user_id, course_id)
            .await
            .map_err(|e| IssueCertificateError::RepositoryError(e.to_string()))?;

        Ok(progress
            .map(|p| compute_percent(&p.completed_lessons, &course.lesson_ids()))
            .unwrap_or(0))
    }
}

const MAX_ID_ATTEMPTS: usize = 3;

fn repo_err(e: CertificateRepositoryError) -> IssueCertificateError {
    IssueCertificateError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R, P, E, C> IssueCertificateUseCase for IssueCertificateService<R, P, E, C>
where
    R: CertificateRepository + Send + Sync,
    P: ProgressRepository + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<IssuedCertificate, IssueCertificateError> {
        let enrolled = self
            .enrollments
            .is_enrolled(user_id, course_id)
            .await
            .map_err(|e| IssueCertificateError::RepositoryError(e.to_string()))?;
        if !enrolled {
            return Err(IssueCertificateError::NotEnrolled);
        }

        if let Some(existing) = self.repository.find(user_id, course_id).await.map_err(repo_err)? {
            return Ok(IssuedCertificate {
                certificate: existing,
                created: false,
            });
        }

        let percent = self.completion(user_id, course_id).await?;
        if percent < 100 {
            return Err(IssueCertificateError::CourseNotCompleted);
        }

        let mut attempts = 0;
        let created = loop {
            attempts += 1;
            let data = NewCertificate {
                certificate_id: generate_certificate_id(),
                user_id,
                course_id,
            };
            match self.repository.create(data).await {
                Err(CertificateRepositoryError::IdCollision) if attempts < MAX_ID_ATTEMPTS => {
                    tracing::warn!(attempts, "Certificate id collision, regenerating");
                }
                other => break other,
            }
        };

        match created {
            Ok(certificate) => {
                tracing::info!(
                    user_id = %user_id,
                    course_id = %course_id,
                    certificate_id = %certificate.certificate_id,
                    "Certificate issued"
                );
                Ok(IssuedCertificate {
                    certificate,
                    created: true,
                })
            }
            Err(CertificateRepositoryError::AlreadyIssued) => {
                let stored = self
                    .repository
                    .find(user_id, course_id)
                    .await
                    .map_err(repo_err)?
                    .ok_or_else(|| {
                        IssueCertificateError::RepositoryError(
                            "certificate vanished after duplicate insert".to_string(),
                        )
                    })?;
                Ok(IssuedCertificate {
                    certificate: stored,
                    created: false,
                })
            }
            Err(e) => Err(repo_err(e)),
        }
    }
}
