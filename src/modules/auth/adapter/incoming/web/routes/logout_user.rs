use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{LogoutCommand, LogoutError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    pub refresh_token: String,
}

/// Revoke a refresh token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Invalid refresh token", body = ErrorResponse),
        (status = 403, description = "Refresh token belongs to another user", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    req: web::Json<LogoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = LogoutCommand {
        user_id: user.user_id,
        refresh_token: req.into_inner().refresh_token,
    };

    match data.auth.logout.execute(command).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_logout_error(e),
    }
}

fn map_logout_error(err: LogoutError) -> HttpResponse {
    match err {
        LogoutError::InvalidToken => {
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }
        LogoutError::TokenOwnerMismatch => ApiResponse::forbidden(
            "TOKEN_OWNER_MISMATCH",
            "Refresh token does not belong to the caller",
        ),
        LogoutError::RepositoryError(e) => {
            tracing::error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::LogoutUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_fakes::StubTokenProvider;
    use crate::tests::support::http::{bearer, read_json, token_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockLogout {
        result: Result<(), LogoutError>,
    }

    #[async_trait]
    impl LogoutUseCase for MockLogout {
        async fn execute(&self, _command: LogoutCommand) -> Result<(), LogoutError> {
            self.result.clone()
        }
    }

    async fn logout(mock: MockLogout, authorized: bool) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_logout(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::anonymous()))
                .service(logout_user_handler),
        )
        .await;

        let mut req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(serde_json::json!({ "refresh_token": "refresh" }));
        if authorized {
            req = req.insert_header(bearer());
        }
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn logout_returns_no_content() {
        let resp = logout(MockLogout { result: Ok(()) }, true).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn logout_requires_access_token() {
        let resp = logout(MockLogout { result: Ok(()) }, false).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn foreign_refresh_token_is_forbidden() {
        let resp = logout(
            MockLogout {
                result: Err(LogoutError::TokenOwnerMismatch),
            },
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = read_json(resp).await;
        assert_eq!(body["error"]["code"], "TOKEN_OWNER_MISMATCH");
    }
}
