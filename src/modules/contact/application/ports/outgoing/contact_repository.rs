use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::{ContactMessage, ContactStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Contact message already replied")]
    AlreadyReplied,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, data: NewContactMessage) -> Result<ContactMessage, ContactRepositoryError>;

    async fn find(&self, id: Uuid) -> Result<Option<ContactMessage>, ContactRepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError>;

    /// Only transitions messages that are still `new`.
    async fn mark_replied(
        &self,
        id: Uuid,
        subject: &str,
        body: &str,
    ) -> Result<ContactMessage, ContactRepositoryError>;
}
