use actix_web::{get, web, Responder};

use crate::category::application::ports::incoming::use_cases::ListCategoriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/categories")]
pub async fn list_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.category.list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(ListCategoriesError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list categories");
            ApiResponse::internal_error()
        }
    }
}
