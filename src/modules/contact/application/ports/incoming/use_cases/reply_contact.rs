use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::ContactMessage;

pub const MAX_REPLY_SUBJECT_LEN: usize = 200;
pub const MAX_REPLY_BODY_LEN: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyContactCommand {
    message_id: Uuid,
    subject: String,
    body: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReplyContactCommandError {
    #[error("Reply subject must be between 1 and {MAX_REPLY_SUBJECT_LEN} characters")]
    InvalidSubject,

    #[error("Reply body must be between 1 and {MAX_REPLY_BODY_LEN} characters")]
    InvalidBody,
}

impl ReplyContactCommand {
    pub fn new(
        message_id: Uuid,
        subject: String,
        body: String,
    ) -> Result<Self, ReplyContactCommandError> {
        let subject = subject.trim().to_string();
        let body = body.trim().to_string();

        if subject.is_empty() || subject.chars().count() > MAX_REPLY_SUBJECT_LEN {
            return Err(ReplyContactCommandError::InvalidSubject);
        }
        if body.is_empty() || body.chars().count() > MAX_REPLY_BODY_LEN {
            return Err(ReplyContactCommandError::InvalidBody);
        }

        Ok(Self {
            message_id,
            subject,
            body,
        })
    }

    pub fn message_id(&self) -> Uuid {
        self.message_id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplyContactError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Contact message already replied")]
    AlreadyReplied,

    #[error("Email delivery failed: {0}")]
    EmailDeliveryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReplyContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ReplyContactCommand,
    ) -> Result<ContactMessage, ReplyContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_subject_and_body() {
        let id = Uuid::new_v4();

        assert_eq!(
            ReplyContactCommand::new(id, " ".to_string(), "Thanks".to_string()).unwrap_err(),
            ReplyContactCommandError::InvalidSubject
        );
        assert_eq!(
            ReplyContactCommand::new(id, "Re: Refund".to_string(), "".to_string()).unwrap_err(),
            ReplyContactCommandError::InvalidBody
        );
    }
}
