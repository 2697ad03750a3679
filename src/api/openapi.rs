use crate::api::schemas::{ErrorDetail, ErrorResponse};
use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LogoutRequestDto, RefreshTokenRequestDto, RegisterUserRequest,
    UpdateProfileRequest,
};
use crate::auth::application::domain::entities::{InstructorStatus, UserProfile, UserRole};
use crate::auth::application::ports::incoming::use_cases::{AuthSession, RefreshedToken};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Marketplace API",
        version = "1.0.0",
        description = "Accounts and sessions for the course marketplace"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::get_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            RegisterUserRequest,
            LoginRequestDto,
            RefreshTokenRequestDto,
            LogoutRequestDto,
            UpdateProfileRequest,
            AuthSession,
            RefreshedToken,
            UserProfile,
            UserRole,
            InstructorStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup, login and token lifecycle"),
        (name = "users", description = "Own profile"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[::core::prelude::v1::test]
    fn document_lists_auth_paths_and_bearer_scheme() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/auth/signup"));
        assert!(doc.paths.paths.contains_key("/api/users/profile"));

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
        assert!(components.schemas.contains_key("AuthSession"));
    }

    #[actix_web::test]
    async fn serves_document_as_json() {
        let app = test::init_service(App::new().service(openapi_json)).await;
        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["info"]["title"], "Course Marketplace API");
    }
}
