use async_trait::async_trait;
use email_address::EmailAddress;

use crate::contact::application::{
    domain::entities::ContactMessage, ports::outgoing::NewContactMessage,
};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitContactCommand {
    data: NewContactMessage,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactCommandError {
    #[error("Name must be between 1 and {MAX_NAME_LEN} characters")]
    InvalidName,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Subject must be between 1 and {MAX_SUBJECT_LEN} characters")]
    InvalidSubject,

    #[error("Message must be between 1 and {MAX_MESSAGE_LEN} characters")]
    InvalidMessage,
}

fn within(value: &str, max: usize) -> bool {
    !value.is_empty() && value.chars().count() <= max
}

impl SubmitContactCommand {
    pub fn new(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<Self, SubmitContactCommandError> {
        let name = name.trim().to_string();
        let email = email.trim().to_lowercase();
        let subject = subject.trim().to_string();
        let message = message.trim().to_string();

        if !within(&name, MAX_NAME_LEN) {
            return Err(SubmitContactCommandError::InvalidName);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(SubmitContactCommandError::InvalidEmail);
        }
        if !within(&subject, MAX_SUBJECT_LEN) {
            return Err(SubmitContactCommandError::InvalidSubject);
        }
        if !within(&message, MAX_MESSAGE_LEN) {
            return Err(SubmitContactCommandError::InvalidMessage);
        }

        Ok(Self {
            data: NewContactMessage {
                name,
                email,
                subject,
                message,
            },
        })
    }

    pub fn email(&self) -> &str {
        &self.data.email
    }

    pub fn into_data(self) -> NewContactMessage {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactMessage, SubmitContactError>;
}
