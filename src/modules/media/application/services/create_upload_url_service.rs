use async_trait::async_trait;
use rand::RngCore;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::media::application::{
    domain::{entities::UploadTicket, policies::UploadPolicy},
    ports::{
        incoming::use_cases::{
            make_object_key, CreateUploadUrlCommand, CreateUploadUrlError, CreateUploadUrlUseCase,
        },
        outgoing::{ObjectLocation, UploadSigner},
    },
};

/// TTL for signed upload URLs.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

fn random_suffix() -> String {
    let mut bytes = [0u8; 4];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub struct CreateUploadUrlService<S, U>
where
    S: UploadSigner + Send + Sync,
    U: UserQuery + Send + Sync,
{
    signer: S,
    users: U,
    policy: Arc<UploadPolicy>,
}

impl<S, U> CreateUploadUrlService<S, U>
where
    S: UploadSigner + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(signer: S, users: U, policy: Arc<UploadPolicy>) -> Self {
        Self {
            signer,
            users,
            policy,
        }
    }
}

#[async_trait]
impl<S, U> CreateUploadUrlUseCase for CreateUploadUrlService<S, U>
where
    S: UploadSigner + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateUploadUrlCommand,
    ) -> Result<UploadTicket, CreateUploadUrlError> {
        let instructor = self
            .users
            .find_by_id(command.instructor_id())
            .await
            .map_err(|e| CreateUploadUrlError::RepositoryError(e.to_string()))?;

        if !instructor.is_some_and(|p| p.is_approved_instructor()) {
            return Err(CreateUploadUrlError::InstructorNotApproved);
        }

        let object_key = make_object_key(
            command.kind(),
            chrono::Utc::now().timestamp_millis(),
            &random_suffix(),
            command.extension(),
        );
        let location = ObjectLocation::try_new(self.policy.bucket_name.clone(), object_key)
            .map_err(|e| CreateUploadUrlError::StorageError(e.to_string()))?;

        let upload_url = self
            .signer
            .signed_upload_url(&location, SIGNED_URL_TTL)
            .await
            .map_err(CreateUploadUrlError::from)?;

        tracing::info!(
            instructor_id = %command.instructor_id(),
            kind = command.kind().as_str(),
            object_key = location.object_key(),
            size = command.file_size_bytes(),
            "Upload URL issued"
        );

        Ok(UploadTicket {
            upload_url,
            public_url: self.policy.public_url(location.object_key()),
            object_key: location.object_key().to_string(),
            expires_in_secs: SIGNED_URL_TTL.as_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{InstructorStatus, UserId, UserRole};
    use crate::media::application::domain::entities::UploadKind;
    use crate::media::application::ports::outgoing::SignUrlError;
    use crate::tests::support::auth_fakes::{sample_profile, FakeUserQuery};
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingSigner {
        calls: Arc<Mutex<Vec<(String, String, Duration)>>>,
        fail: bool,
    }

    #[async_trait]
    impl UploadSigner for RecordingSigner {
        async fn signed_upload_url(
            &self,
            location: &ObjectLocation,
            ttl: Duration,
        ) -> Result<String, SignUrlError> {
            self.calls.lock().unwrap().push((
                location.bucket_name().to_string(),
                location.object_key().to_string(),
                ttl,
            ));
            if self.fail {
                return Err(SignUrlError::AccessDenied);
            }
            Ok(format!("https://signed.test/{}", location.object_key()))
        }
    }

    fn policy() -> Arc<UploadPolicy> {
        Arc::new(UploadPolicy::new(
            "media".to_string(),
            "https://cdn.test".to_string(),
        ))
    }

    fn command(instructor: UserId) -> CreateUploadUrlCommand {
        CreateUploadUrlCommand::new(
            instructor,
            UploadKind::Thumbnail,
            "cover.webp",
            "image/webp",
            2048,
            &policy(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn approved_instructor_gets_signed_url() {
        let instructor = sample_profile(UserRole::Instructor);
        let signer = RecordingSigner::default();
        let service = CreateUploadUrlService::new(
            signer.clone(),
            FakeUserQuery::default().with_user(instructor.clone(), "x"),
            policy(),
        );

        let ticket = service.execute(command(instructor.id)).await.unwrap();

        let calls = signer.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "media");
        assert!(calls[0].1.starts_with("thumbnails/thumbnail-"));
        assert!(calls[0].1.ends_with(".webp"));
        assert_eq!(calls[0].2, SIGNED_URL_TTL);
        assert_eq!(ticket.public_url, format!("https://cdn.test/media/{}", calls[0].1));
        assert_eq!(ticket.expires_in_secs, 900);
    }

    #[tokio::test]
    async fn pending_instructor_is_rejected() {
        let mut instructor = sample_profile(UserRole::Instructor);
        instructor.instructor_status = Some(InstructorStatus::Pending);
        let signer = RecordingSigner::default();
        let service = CreateUploadUrlService::new(
            signer.clone(),
            FakeUserQuery::default().with_user(instructor.clone(), "x"),
            policy(),
        );

        let result = service.execute(command(instructor.id)).await;

        assert!(matches!(result, Err(CreateUploadUrlError::InstructorNotApproved)));
        assert!(signer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn signing_failure_is_storage_error() {
        let instructor = sample_profile(UserRole::Instructor);
        let service = CreateUploadUrlService::new(
            RecordingSigner {
                fail: true,
                ..Default::default()
            },
            FakeUserQuery::default().with_user(instructor.clone(), "x"),
            policy(),
        );

        let result = service.execute(command(instructor.id)).await;

        assert!(matches!(result, Err(CreateUploadUrlError::StorageError(_))));
    }
}
