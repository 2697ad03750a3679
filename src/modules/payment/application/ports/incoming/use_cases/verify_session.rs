use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    enrollment::application::ports::incoming::use_cases::GrantOutcome,
};

#[derive(Debug, Clone, PartialEq)]
pub struct VerifySessionCommand {
    user_id: UserId,
    session_id: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifySessionCommandError {
    #[error("session_id is required")]
    MissingSessionId,
}

impl VerifySessionCommand {
    pub fn new(user_id: UserId, session_id: String) -> Result<Self, VerifySessionCommandError> {
        let session_id = session_id.trim().to_string();
        if session_id.is_empty() {
            return Err(VerifySessionCommandError::MissingSessionId);
        }
        Ok(Self {
            user_id,
            session_id,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifySessionError {
    #[error("Checkout session belongs to another user")]
    SessionOwnerMismatch,

    #[error("Payment has not been completed")]
    PaymentNotCompleted,

    #[error("Checkout session does not reference a course")]
    InvalidSession,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Payment provider error: {0}")]
    GatewayError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VerifySessionUseCase: Send + Sync {
    async fn execute(&self, command: VerifySessionCommand)
        -> Result<GrantOutcome, VerifySessionError>;
}
