use actix_web::{post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::CourseId;
use crate::enrollment::application::ports::incoming::use_cases::EnrollInCourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/users/courses/{course_id}/enroll")]
pub async fn enroll_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .enrollment
        .enroll
        .execute(user.user_id, CourseId::from(path.into_inner()))
        .await
    {
        Ok(outcome) if outcome.created => ApiResponse::created(outcome.enrollment),
        Ok(outcome) => ApiResponse::success(outcome.enrollment),
        Err(e) => map_enroll_error(e),
    }
}

fn map_enroll_error(err: EnrollInCourseError) -> HttpResponse {
    match err {
        EnrollInCourseError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        EnrollInCourseError::PaymentRequired => ApiResponse::payment_required(
            "PAYMENT_REQUIRED",
            "This course must be purchased before enrolling",
        ),
        EnrollInCourseError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to enroll");
            ApiResponse::internal_error()
        }
    }
}
