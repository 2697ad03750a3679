use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted fields stay unchanged; blank strings clear optional fields.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    #[schema(example = "https://example.com")]
    pub website: Option<String>,
    #[schema(example = "https://linkedin.com/in/aisha")]
    pub linkedin: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Update the current user's profile
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = "users",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfile>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[put("/api/users/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    // 1. Validate
    let command = match UpdateProfileCommand::new(
        user.user_id,
        req.name,
        req.headline,
        req.bio,
        req.website,
        req.linkedin,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    // 2. Persist
    match data.auth.update_profile.execute(command).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_update_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UpdateProfileCommandError) -> HttpResponse {
    match err {
        UpdateProfileCommandError::InvalidUrl(_) => {
            ApiResponse::bad_request("INVALID_URL", &err.to_string())
        }
        UpdateProfileCommandError::NothingToUpdate => {
            ApiResponse::bad_request("NOTHING_TO_UPDATE", &err.to_string())
        }
        other => ApiResponse::bad_request("VALIDATION_ERROR", &other.to_string()),
    }
}

fn map_update_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UpdateProfileError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}
