use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[post("/api/admin/categories")]
pub async fn create_category_handler(
    _admin: AdminUser,
    req: web::Json<CreateCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateCategoryCommand::new(req.into_inner().name) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.category.create.execute(command).await {
        Ok(category) => ApiResponse::created(category),
        Err(e) => map_create_error(e),
    }
}

fn map_create_error(err: CreateCategoryError) -> HttpResponse {
    match err {
        CreateCategoryError::AlreadyExists => {
            ApiResponse::conflict("CATEGORY_ALREADY_EXISTS", "Category already exists")
        }
        CreateCategoryError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to create category");
            ApiResponse::internal_error()
        }
    }
}
