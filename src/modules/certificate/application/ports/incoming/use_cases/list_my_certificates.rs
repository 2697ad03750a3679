use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    certificate::application::domain::entities::MyCertificate,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMyCertificatesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListMyCertificatesUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId)
        -> Result<Vec<MyCertificate>, ListMyCertificatesError>;
}
