use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{RefreshTokenError, RefreshedToken};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshedToken>)),
        (status = 400, description = "Refresh token missing", body = ErrorResponse),
        (status = 401, description = "Refresh token invalid, revoked or orphaned", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.refresh.execute(&req.refresh_token).await {
        Ok(token) => ApiResponse::success(token),
        Err(e) => map_refresh_error(e),
    }
}

fn map_refresh_error(err: RefreshTokenError) -> HttpResponse {
    match err {
        RefreshTokenError::MissingToken => {
            ApiResponse::bad_request("MISSING_REFRESH_TOKEN", "Refresh token is required")
        }
        RefreshTokenError::InvalidToken | RefreshTokenError::UserNotFound => {
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }
        RefreshTokenError::TokenRevoked => {
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }
        RefreshTokenError::TokenGenerationFailed(e) | RefreshTokenError::RepositoryError(e) => {
            tracing::error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::RefreshTokenUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::http::read_json;
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockRefresh {
        result: Result<RefreshedToken, RefreshTokenError>,
    }

    #[async_trait]
    impl RefreshTokenUseCase for MockRefresh {
        async fn execute(&self, _token: &str) -> Result<RefreshedToken, RefreshTokenError> {
            self.result.clone()
        }
    }

    async fn refresh(mock: MockRefresh) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_refresh(mock).build();
        let app = test::init_service(App::new().app_data(state).service(refresh_token_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "refresh" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        (resp.status().as_u16(), read_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_new_access_token() {
        let (status, body) = refresh(MockRefresh {
            result: Ok(RefreshedToken {
                access_token: "new-access".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 1800,
            }),
        })
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["access_token"], "new-access");
        assert_eq!(body["data"]["expires_in"], 1800);
    }

    #[actix_web::test]
    async fn revoked_token_is_unauthorized() {
        let (status, body) = refresh(MockRefresh {
            result: Err(RefreshTokenError::TokenRevoked),
        })
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "TOKEN_REVOKED");
    }

    #[actix_web::test]
    async fn deleted_user_is_unauthorized() {
        let (status, body) = refresh(MockRefresh {
            result: Err(RefreshTokenError::UserNotFound),
        })
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_REFRESH_TOKEN");
    }
}
