use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Aisha Khan")]
    pub name: String,
    #[schema(example = "aisha@example.com")]
    pub email: String,
    #[schema(example = "correct-horse-battery")]
    pub password: String,
    /// `user` (default) or `instructor`.
    #[schema(example = "instructor")]
    pub role: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create an account
///
/// Instructor accounts start with a `pending` approval status.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSession>)),
        (status = 400, description = "Invalid input or role", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    // 1. Validate input
    let command = match RegisterUserCommand::new(req.name, req.email, req.password, req.role) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    // 2. Execute
    match data.auth.register.execute(command).await {
        Ok(session) => ApiResponse::created(session),
        Err(e) => map_register_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    match err {
        RegisterUserCommandError::InvalidRole => {
            ApiResponse::bad_request("INVALID_ROLE", &err.to_string())
        }
        other => ApiResponse::bad_request("VALIDATION_ERROR", &other.to_string()),
    }
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyRegistered => {
            ApiResponse::conflict("EMAIL_ALREADY_REGISTERED", "Email is already registered")
        }
        RegisterUserError::HashingFailed(e)
        | RegisterUserError::TokenGenerationFailed(e)
        | RegisterUserError::RepositoryError(e) => {
            tracing::error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
