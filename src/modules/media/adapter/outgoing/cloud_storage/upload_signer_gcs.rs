use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::media::application::ports::outgoing::{ObjectLocation, SignUrlError, UploadSigner};

/// google-cloud-storage addresses buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_sign_error(msg: &str) -> SignUrlError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        SignUrlError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        SignUrlError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") {
        SignUrlError::Configuration
    } else {
        SignUrlError::Infrastructure
    }
}

/// Seam over the signing client so tests need no credentials.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_key: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

#[derive(Clone)]
pub struct GcsUploadSigner {
    client: Arc<OnceCell<Arc<dyn GcsClient>>>,
}

impl Default for GcsUploadSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl GcsUploadSigner {
    /// The signer is built lazily on first use.
    pub fn new() -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
        }
    }

    async fn get_client(&self) -> Result<&Arc<dyn GcsClient>, String> {
        self.client
            .get_or_try_init(|| async {
                let real = RealGcsClient::new()?;
                Ok(Arc::new(real) as Arc<dyn GcsClient>)
            })
            .await
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>) -> Self {
        Self {
            client: Arc::new(OnceCell::new_with(Some(client))),
        }
    }
}

#[async_trait]
impl UploadSigner for GcsUploadSigner {
    async fn signed_upload_url(
        &self,
        location: &ObjectLocation,
        ttl: Duration,
    ) -> Result<String, SignUrlError> {
        let client = self.get_client().await.map_err(|e| {
            tracing::error!(error = %e, "GCS signer unavailable");
            map_sign_error(&e)
        })?;

        client
            .sign_put_url(
                &bucket_resource(location.bucket_name()),
                location.object_key(),
                ttl,
            )
            .await
            .map_err(|e| {
                tracing::error!(error = %e, object_key = location.object_key(), "Signing failed");
                map_sign_error(&e)
            })
    }
}

struct RealGcsClient {
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsClient {
    fn new() -> Result<Self, String> {
        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                tracing::error!(
                    "Signed URLs need service-account credentials in GOOGLE_APPLICATION_CREDENTIALS"
                );
                format!("invalid signer configuration: {e}")
            })?;

        tracing::info!("GCS signer created");
        Ok(Self { signer })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_key: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_key.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeGcsClient {
        last_call: Mutex<Option<(String, String, Duration)>>,
        result: Mutex<Option<Result<String, String>>>,
    }

    impl FakeGcsClient {
        fn returning(result: Result<String, String>) -> Arc<Self> {
            let fake = Self::default();
            *fake.result.lock().unwrap() = Some(result);
            Arc::new(fake)
        }
    }

    #[async_trait]
    impl GcsClient for FakeGcsClient {
        async fn sign_put_url(
            &self,
            bucket_resource: &str,
            object_key: &str,
            ttl: Duration,
        ) -> Result<String, String> {
            *self.last_call.lock().unwrap() =
                Some((bucket_resource.to_string(), object_key.to_string(), ttl));
            self.result
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| Ok("ok".to_string()))
        }
    }

    fn location() -> ObjectLocation {
        ObjectLocation::try_new(
            "course-marketplace-media".to_string(),
            "videos/video-1-abcd.mp4".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn signs_put_with_bucket_resource() {
        let fake = FakeGcsClient::returning(Ok("https://signed.example".to_string()));
        let signer = GcsUploadSigner::with_client(fake.clone());

        let url = signer
            .signed_upload_url(&location(), Duration::from_secs(900))
            .await
            .unwrap();

        assert_eq!(url, "https://signed.example");
        let call = fake.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/course-marketplace-media");
        assert_eq!(call.1, "videos/video-1-abcd.mp4");
        assert_eq!(call.2, Duration::from_secs(900));
    }

    #[tokio::test]
    async fn maps_client_errors() {
        let cases = [
            ("Permission denied", SignUrlError::AccessDenied),
            ("Bucket not found (404)", SignUrlError::BucketNotFound),
            ("Invalid configuration", SignUrlError::Configuration),
            ("socket closed", SignUrlError::Infrastructure),
        ];

        for (message, expected) in cases {
            let signer = GcsUploadSigner::with_client(FakeGcsClient::returning(Err(
                message.to_string(),
            )));

            let err = signer
                .signed_upload_url(&location(), Duration::from_secs(60))
                .await
                .unwrap_err();

            assert_eq!(err, expected, "{message}");
        }
    }
}
