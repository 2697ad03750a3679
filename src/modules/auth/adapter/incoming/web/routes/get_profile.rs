use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<UserProfile>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/users/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.get_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_get_profile_error(e),
    }
}

fn map_get_profile_error(err: GetProfileError) -> HttpResponse {
    match err {
        GetProfileError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        GetProfileError::QueryError(e) => {
            tracing::error!(error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
