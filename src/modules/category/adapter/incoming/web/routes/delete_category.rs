use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::category::application::ports::incoming::use_cases::DeleteCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/categories/{id}")]
pub async fn delete_category_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.category.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(DeleteCategoryError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Failed to delete category");
            ApiResponse::internal_error()
        }
    }
}
