use async_trait::async_trait;

use crate::category::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
        outgoing::{CategoryRepository, CategoryRepositoryError},
    },
};

pub struct CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CreateCategoryError> {
        let category = self
            .repository
            .create(command.name(), command.slug())
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::AlreadyExists => CreateCategoryError::AlreadyExists,
                other => CreateCategoryError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");
        Ok(category)
    }
}
