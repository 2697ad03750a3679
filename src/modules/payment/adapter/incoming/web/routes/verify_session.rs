use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::payment::application::ports::incoming::use_cases::{
    VerifySessionCommand, VerifySessionError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifySessionRequest {
    pub session_id: String,
}

#[post("/api/payment/verify-session")]
pub async fn verify_session_handler(
    user: AuthenticatedUser,
    req: web::Json<VerifySessionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match VerifySessionCommand::new(user.user_id, req.into_inner().session_id) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.payment.verify.execute(command).await {
        Ok(outcome) => ApiResponse::success(outcome.enrollment),
        Err(e) => map_verify_error(e),
    }
}

fn map_verify_error(err: VerifySessionError) -> HttpResponse {
    match err {
        VerifySessionError::SessionOwnerMismatch => ApiResponse::forbidden(
            "SESSION_OWNER_MISMATCH",
            "This checkout session belongs to another user",
        ),
        VerifySessionError::PaymentNotCompleted => {
            ApiResponse::bad_request("PAYMENT_NOT_COMPLETED", "Payment has not been completed")
        }
        VerifySessionError::InvalidSession => ApiResponse::bad_request(
            "INVALID_SESSION",
            "Checkout session does not reference a course",
        ),
        VerifySessionError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        VerifySessionError::GatewayError(e) => {
            tracing::error!(error = %e, "Checkout session lookup failed");
            ApiResponse::bad_gateway(
                "PAYMENT_PROVIDER_ERROR",
                "Could not verify the session with the payment provider",
            )
        }
        VerifySessionError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to enroll after payment");
            ApiResponse::internal_error()
        }
    }
}
