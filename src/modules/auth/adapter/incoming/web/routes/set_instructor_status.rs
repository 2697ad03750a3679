use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::{InstructorStatus, UserId};
use crate::auth::application::ports::incoming::use_cases::SetInstructorStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SetInstructorStatusRequest {
    pub status: String,
}

#[patch("/api/admin/users/{id}/instructor-status")]
pub async fn set_instructor_status_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SetInstructorStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(status) = InstructorStatus::parse(&req.status) else {
        return ApiResponse::bad_request(
            "INVALID_STATUS",
            "Status must be one of: pending, approved, rejected",
        );
    };
    let user_id = UserId::from(path.into_inner());

    match data.auth.set_instructor_status.execute(user_id, status).await {
        Ok(profile) => {
            tracing::info!(admin_id = %admin.0.user_id, user_id = %user_id, "Instructor status updated");
            ApiResponse::success(profile)
        }
        Err(e) => map_status_error(e),
    }
}

fn map_status_error(err: SetInstructorStatusError) -> HttpResponse {
    match err {
        SetInstructorStatusError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        SetInstructorStatusError::NotAnInstructor => {
            ApiResponse::bad_request("NOT_AN_INSTRUCTOR", "User is not an instructor")
        }
        SetInstructorStatusError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to update instructor status");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserProfile, UserRole};
    use crate::auth::application::ports::incoming::use_cases::SetInstructorStatusUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_fakes::{sample_profile, StubTokenProvider};
    use crate::tests::support::http::{bearer, read_json, token_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockSetStatus {
        result: Result<UserProfile, SetInstructorStatusError>,
    }

    #[async_trait]
    impl SetInstructorStatusUseCase for MockSetStatus {
        async fn execute(
            &self,
            _user_id: UserId,
            _status: InstructorStatus,
        ) -> Result<UserProfile, SetInstructorStatusError> {
            self.result.clone()
        }
    }

    async fn patch_status(mock: MockSetStatus, status: &str) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_set_instructor_status(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::for_user(
                    Uuid::new_v4(),
                    UserRole::Admin,
                )))
                .service(set_instructor_status_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/users/{}/instructor-status", Uuid::new_v4()))
            .insert_header(bearer())
            .set_json(serde_json::json!({ "status": status }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        (resp.status().as_u16(), read_json(resp).await)
    }

    #[actix_web::test]
    async fn approves_instructor() {
        let profile = sample_profile(UserRole::Instructor);

        let (status, body) = patch_status(
            MockSetStatus {
                result: Ok(profile),
            },
            "approved",
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["instructor_status"], "approved");
    }

    #[actix_web::test]
    async fn unknown_status_is_rejected() {
        let (status, body) = patch_status(
            MockSetStatus {
                result: Err(SetInstructorStatusError::UserNotFound),
            },
            "promoted",
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_STATUS");
    }

    #[actix_web::test]
    async fn student_target_is_rejected() {
        let (status, body) = patch_status(
            MockSetStatus {
                result: Err(SetInstructorStatusError::NotAnInstructor),
            },
            "approved",
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "NOT_AN_INSTRUCTOR");
    }
}
