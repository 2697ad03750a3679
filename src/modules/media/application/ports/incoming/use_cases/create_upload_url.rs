use async_trait::async_trait;
use std::path::Path;

use crate::auth::application::domain::entities::UserId;
use crate::media::application::{
    domain::{
        entities::{UploadKind, UploadTicket},
        policies::UploadPolicy,
    },
    ports::outgoing::SignUrlError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadUrlCommandError {
    #[error("Invalid file name")]
    InvalidFileName,

    #[error("File is empty")]
    EmptyFile,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Invalid mime type: {0}")]
    InvalidMimeType(String),

    #[error("Mime type does not match file extension (mime={mime_type}, ext={ext})")]
    MimeExtensionMismatch { mime_type: String, ext: String },
}

fn sanitize_basename(file_name: &str, max_len: usize) -> Result<&str, UploadUrlCommandError> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or(UploadUrlCommandError::InvalidFileName)?;

    // Path-like input has a basename that differs from the raw name.
    if base != file_name || base.len() > max_len || base.chars().any(|c| c.is_control()) {
        return Err(UploadUrlCommandError::InvalidFileName);
    }
    if base.contains('\\') {
        return Err(UploadUrlCommandError::InvalidFileName);
    }

    Ok(base)
}

fn ext_lower(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// `{kind}s/{kind}-{timestamp}-{random}.{ext}`; nothing user-controlled but the extension.
pub fn make_object_key(kind: UploadKind, timestamp_ms: i64, random: &str, ext: &str) -> String {
    let kind = kind.as_str();
    format!("{kind}s/{kind}-{timestamp_ms}-{random}.{ext}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUploadUrlCommand {
    instructor_id: UserId,
    kind: UploadKind,
    extension: String,
    mime_type: String,
    file_size_bytes: u64,
}

impl CreateUploadUrlCommand {
    /// Validates the upload intent against the kind's limits in `policy`.
    pub fn new(
        instructor_id: UserId,
        kind: UploadKind,
        file_name: &str,
        mime_type: &str,
        file_size_bytes: u64,
        policy: &UploadPolicy,
    ) -> Result<Self, UploadUrlCommandError> {
        let base = sanitize_basename(file_name.trim(), policy.max_file_name_len)?;
        let ext = ext_lower(base);
        let mime_type = mime_type.trim().to_ascii_lowercase();
        let limits = policy.limits(kind);

        if !limits.accepts_mime(&mime_type) {
            return Err(UploadUrlCommandError::InvalidMimeType(mime_type));
        }
        if !limits.extension_matches(&mime_type, &ext) {
            return Err(UploadUrlCommandError::MimeExtensionMismatch { mime_type, ext });
        }
        if file_size_bytes == 0 {
            return Err(UploadUrlCommandError::EmptyFile);
        }
        if file_size_bytes > limits.max_file_size_bytes {
            return Err(UploadUrlCommandError::FileTooLarge {
                max_bytes: limits.max_file_size_bytes,
                actual_bytes: file_size_bytes,
            });
        }

        Ok(Self {
            instructor_id,
            kind,
            extension: ext,
            mime_type,
            file_size_bytes,
        })
    }

    pub fn instructor_id(&self) -> UserId {
        self.instructor_id
    }

    pub fn kind(&self) -> UploadKind {
        self.kind
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn file_size_bytes(&self) -> u64 {
        self.file_size_bytes
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUploadUrlError {
    #[error("Instructor is not approved")]
    InstructorNotApproved,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SignUrlError> for CreateUploadUrlError {
    fn from(e: SignUrlError) -> Self {
        CreateUploadUrlError::StorageError(e.to_string())
    }
}

#[async_trait]
pub trait CreateUploadUrlUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateUploadUrlCommand,
    ) -> Result<UploadTicket, CreateUploadUrlError>;
}
