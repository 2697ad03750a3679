mod create_category;
mod delete_category;
mod list_categories;

pub use create_category::{
    CreateCategoryCommand, CreateCategoryCommandError, CreateCategoryError,
    CreateCategoryUseCase,
};
pub use delete_category::{DeleteCategoryError, DeleteCategoryUseCase};
pub use list_categories::{ListCategoriesError, ListCategoriesUseCase};
