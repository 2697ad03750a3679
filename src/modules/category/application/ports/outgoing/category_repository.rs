use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::entities::Category;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category already exists")]
    AlreadyExists,

    #[error("Category not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, name: &str, slug: &str) -> Result<Category, CategoryRepositoryError>;

    async fn delete(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError>;
}
