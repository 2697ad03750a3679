use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/users/{id}")]
pub async fn delete_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = UserId::from(path.into_inner());

    match data.auth.delete_user.execute(admin.0.user_id, target).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_delete_error(e),
    }
}

fn map_delete_error(err: DeleteUserError) -> HttpResponse {
    match err {
        DeleteUserError::CannotDeleteSelf => ApiResponse::bad_request(
            "CANNOT_DELETE_SELF",
            "Administrators cannot delete their own account",
        ),
        DeleteUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        DeleteUserError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
