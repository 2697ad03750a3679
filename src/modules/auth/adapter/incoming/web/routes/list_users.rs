use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::ListUsersError;
use crate::auth::application::ports::outgoing::UserListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[get("/api/admin/users")]
pub async fn list_users_handler(
    _admin: AdminUser,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let role = match query.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        None => None,
        Some(raw) => match UserRole::parse(raw) {
            Some(role) => Some(role),
            None => return ApiResponse::bad_request("INVALID_ROLE", "Unknown role filter"),
        },
    };

    let filter = UserListFilter {
        search: query.search,
        role,
    };
    let page = PageRequest::from_query(query.page, query.per_page);

    match data.auth.list_users.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListUsersError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
