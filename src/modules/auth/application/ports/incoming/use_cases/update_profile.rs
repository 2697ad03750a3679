use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::outgoing::UpdateProfileData,
};

use super::register_user::MAX_NAME_LEN;

const MAX_HEADLINE_LEN: usize = 150;
const MAX_BIO_LEN: usize = 2000;
const MAX_URL_LEN: usize = 255;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid url regex"));

//
// ──────────────────────────────────────────────────────────
// Update Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    data: UpdateProfileData,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Field '{0}' is too long")]
    FieldTooLong(&'static str),

    #[error("Field '{0}' must be an http(s) URL")]
    InvalidUrl(&'static str),

    #[error("No fields to update")]
    NothingToUpdate,
}

/// Empty or blank strings clear the field.
fn optional_text(
    value: Option<String>,
    field: &'static str,
    max_len: usize,
) -> Result<Option<Option<String>>, UpdateProfileCommandError> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(Some(None));
            }
            if trimmed.chars().count() > max_len {
                return Err(UpdateProfileCommandError::FieldTooLong(field));
            }
            Ok(Some(Some(trimmed.to_string())))
        }
    }
}

fn optional_url(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<Option<String>>, UpdateProfileCommandError> {
    let parsed = optional_text(value, field, MAX_URL_LEN)?;
    if let Some(Some(url)) = &parsed {
        if !URL_RE.is_match(url) {
            return Err(UpdateProfileCommandError::InvalidUrl(field));
        }
    }
    Ok(parsed)
}

impl UpdateProfileCommand {
    pub fn new(
        user_id: UserId,
        name: Option<String>,
        headline: Option<String>,
        bio: Option<String>,
        website: Option<String>,
        linkedin: Option<String>,
    ) -> Result<Self, UpdateProfileCommandError> {
        let name = match name {
            None => None,
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(UpdateProfileCommandError::EmptyName);
                }
                if trimmed.chars().count() > MAX_NAME_LEN {
                    return Err(UpdateProfileCommandError::NameTooLong);
                }
                Some(trimmed.to_string())
            }
        };

        let data = UpdateProfileData {
            name,
            headline: optional_text(headline, "headline", MAX_HEADLINE_LEN)?,
            bio: optional_text(bio, "bio", MAX_BIO_LEN)?,
            website: optional_url(website, "website")?,
            linkedin: optional_url(linkedin, "linkedin")?,
        };

        if data == UpdateProfileData::default() {
            return Err(UpdateProfileCommandError::NothingToUpdate);
        }

        Ok(Self { user_id, data })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn data(&self) -> &UpdateProfileData {
        &self.data
    }

    pub fn into_data(self) -> UpdateProfileData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError>;
}
