use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::{
    domain::entities::{UserId, UserRole},
    ports::outgoing::TokenProvider,
};
use crate::shared::api::ApiResponse;

/// Caller identified by a valid access token.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Caller that may or may not be signed in. A present but invalid token is still rejected.
#[derive(Debug, Clone, Copy)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

/// Caller with the instructor role. Approval is checked by the use cases that need it.
#[derive(Debug, Clone, Copy)]
pub struct InstructorUser(pub AuthenticatedUser);

#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub AuthenticatedUser);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
}

fn authenticate(req: &HttpRequest, token: &str) -> Result<AuthenticatedUser, ActixError> {
    let Some(tokens) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() else {
        tracing::error!("TokenProvider missing from app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    match tokens.verify_token(token) {
        Ok(claims) => Ok(AuthenticatedUser {
            user_id: UserId::from(claims.sub),
            role: claims.role,
        }),
        Err(_) => Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))),
    }
}

fn require_user(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;
    authenticate(req, &token)
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(require_user(req))
    }
}

impl FromRequest for OptionalUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(match extract_token_from_header(req) {
            None => Ok(OptionalUser(None)),
            Some(token) => authenticate(req, &token).map(|user| OptionalUser(Some(user))),
        })
    }
}

impl FromRequest for InstructorUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(require_user(req).and_then(|user| {
            if user.role != UserRole::Instructor {
                return Err(create_api_error(ApiResponse::forbidden(
                    "INSTRUCTOR_ROLE_REQUIRED",
                    "Instructor role required",
                )));
            }
            Ok(InstructorUser(user))
        }))
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(require_user(req).and_then(|user| {
            if !user.is_admin() {
                return Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_ROLE_REQUIRED",
                    "Admin role required",
                )));
            }
            Ok(AdminUser(user))
        }))
    }
}
