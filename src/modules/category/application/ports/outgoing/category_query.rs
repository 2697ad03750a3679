use async_trait::async_trait;

use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// All categories sorted by name.
    async fn list(&self) -> Result<Vec<Category>, CategoryQueryError>;

    /// Case-insensitive lookup by name.
    async fn exists_by_name(&self, name: &str) -> Result<bool, CategoryQueryError>;
}
