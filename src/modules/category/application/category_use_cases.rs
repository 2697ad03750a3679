use std::sync::Arc;

use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase,
};

#[derive(Clone)]
pub struct CategoryUseCases {
    pub list: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
}
