use async_trait::async_trait;
use std::time::Duration;

/// Bucket and object key of a file to be signed.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLocation {
    bucket_name: String,
    object_key: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ObjectLocationError {
    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),
}

impl ObjectLocation {
    pub fn try_new(bucket_name: String, object_key: String) -> Result<Self, ObjectLocationError> {
        if bucket_name.trim().is_empty() {
            return Err(ObjectLocationError::EmptyField("bucket_name"));
        }
        if object_key.trim().is_empty() {
            return Err(ObjectLocationError::EmptyField("object_key"));
        }

        Ok(Self {
            bucket_name,
            object_key,
        })
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_key(&self) -> &str {
        &self.object_key
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SignUrlError {
    #[error("Infrastructure error occurred")]
    Infrastructure,

    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Invalid configuration")]
    Configuration,
}

/// Issues time-limited URLs so clients upload straight to object storage.
#[async_trait]
pub trait UploadSigner: Send + Sync {
    async fn signed_upload_url(
        &self,
        location: &ObjectLocation,
        ttl: Duration,
    ) -> Result<String, SignUrlError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_requires_bucket_and_key() {
        assert_eq!(
            ObjectLocation::try_new(" ".to_string(), "a.png".to_string()).unwrap_err(),
            ObjectLocationError::EmptyField("bucket_name")
        );
        assert_eq!(
            ObjectLocation::try_new("media".to_string(), "\t".to_string()).unwrap_err(),
            ObjectLocationError::EmptyField("object_key")
        );

        let location = ObjectLocation::try_new("media".to_string(), "a.png".to_string()).unwrap();
        assert_eq!(location.bucket_name(), "media");
        assert_eq!(location.object_key(), "a.png");
    }
}
