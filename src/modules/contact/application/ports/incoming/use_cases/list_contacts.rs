use async_trait::async_trait;

use crate::contact::application::domain::entities::{ContactMessage, ContactStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListContactsUseCase: Send + Sync {
    async fn execute(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<ContactMessage>, ListContactsError>;
}
