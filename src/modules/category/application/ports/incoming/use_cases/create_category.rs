use async_trait::async_trait;

use crate::category::application::domain::entities::{slugify, Category};

pub const MAX_CATEGORY_NAME_LEN: usize = 60;

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: String,
    slug: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCategoryCommandError {
    #[error("Category name is required")]
    EmptyName,

    #[error("Category name must be at most {MAX_CATEGORY_NAME_LEN} characters")]
    NameTooLong,
}

impl CreateCategoryCommand {
    pub fn new(name: String) -> Result<Self, CreateCategoryCommandError> {
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return Err(CreateCategoryCommandError::EmptyName);
        }
        if name.chars().count() > MAX_CATEGORY_NAME_LEN {
            return Err(CreateCategoryCommandError::NameTooLong);
        }

        let slug = slugify(&name);
        Ok(Self { name, slug })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Category already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: CreateCategoryCommand)
        -> Result<Category, CreateCategoryError>;
}
