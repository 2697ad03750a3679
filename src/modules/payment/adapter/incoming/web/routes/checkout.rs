use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::CourseId;
use crate::payment::application::ports::incoming::use_cases::CreateCheckoutSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub course_id: Uuid,
}

#[post("/api/payment/checkout-session")]
pub async fn create_checkout_session_handler(
    user: AuthenticatedUser,
    req: web::Json<CheckoutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .payment
        .checkout
        .execute(user.user_id, CourseId::from(req.course_id))
        .await
    {
        Ok(session) => ApiResponse::success(session),
        Err(e) => map_checkout_error(e),
    }
}

fn map_checkout_error(err: CreateCheckoutSessionError) -> HttpResponse {
    match err {
        CreateCheckoutSessionError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        CreateCheckoutSessionError::AlreadyEnrolled => ApiResponse::conflict(
            "ALREADY_ENROLLED",
            "You are already enrolled in this course",
        ),
        CreateCheckoutSessionError::CourseIsFree => ApiResponse::bad_request(
            "COURSE_IS_FREE",
            "This course is free; enroll directly instead",
        ),
        CreateCheckoutSessionError::GatewayError(e) => {
            tracing::error!(error = %e, "Checkout session creation failed");
            ApiResponse::bad_gateway(
                "PAYMENT_PROVIDER_ERROR",
                "Could not reach the payment provider",
            )
        }
        CreateCheckoutSessionError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to prepare checkout");
            ApiResponse::internal_error()
        }
    }
}
