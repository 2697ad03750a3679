use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{AuthSession, LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "aisha@example.com")]
    pub email: String,
    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthSession>)),
        (status = 400, description = "Malformed input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(command).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, "User logged in");
            ApiResponse::success(session)
        }
        Err(e) => map_login_error(e),
    }
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginError::HashingFailed(ref e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        LoginError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        LoginError::QueryError(ref e) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_fakes::sample_profile;
    use crate::tests::support::http::read_json;
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockLogin {
        result: Result<AuthSession, LoginError>,
    }

    impl MockLogin {
        fn success() -> Self {
            Self {
                result: Ok(AuthSession {
                    access_token: "access".to_string(),
                    refresh_token: "refresh".to_string(),
                    token_type: "Bearer".to_string(),
                    expires_in: 1800,
                    user: sample_profile(UserRole::User),
                }),
            }
        }

        fn error(err: LoginError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl LoginUserUseCase for MockLogin {
        async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, LoginError> {
            self.result.clone()
        }
    }

    async fn login(mock: MockLogin, body: serde_json::Value) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_login(mock).build();
        let app = test::init_service(App::new().app_data(state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        (resp.status().as_u16(), read_json(resp).await)
    }

    fn credentials() -> serde_json::Value {
        serde_json::json!({ "email": "  Test@Example.com ", "password": "password123" })
    }

    #[actix_web::test]
    async fn test_login_user_success() {
        let (status, body) = login(MockLogin::success(), credentials()).await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["refresh_token"], "refresh");
        assert_eq!(body["data"]["token_type"], "Bearer");
        assert_eq!(body["data"]["user"]["role"], "user");
    }

    #[actix_web::test]
    async fn test_login_user_invalid_credentials() {
        let (status, body) =
            login(MockLogin::error(LoginError::InvalidCredentials), credentials()).await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_login_with_invalid_email_format() {
        for email in ["notanemail", "missing@", ""] {
            let (status, body) = login(
                MockLogin::success(),
                serde_json::json!({ "email": email, "password": "password123" }),
            )
            .await;

            assert_eq!(status, 400, "Should reject invalid email: {}", email);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_login_query_error() {
        let (status, body) = login(
            MockLogin::error(LoginError::QueryError("pool exhausted".to_string())),
            credentials(),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
