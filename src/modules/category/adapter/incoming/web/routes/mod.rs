mod create_category;
mod delete_category;
mod list_categories;

pub use create_category::*;
pub use delete_category::*;
pub use list_categories::*;
