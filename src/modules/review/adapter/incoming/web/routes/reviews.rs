use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AuthenticatedUser, InstructorUser};
use crate::course::application::domain::entities::CourseId;
use crate::review::application::ports::incoming::use_cases::{
    ListCourseReviewsError, ListInstructorReviewsError, SubmitReviewCommand, SubmitReviewError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    pub rating: i32,
    pub comment: Option<String>,
}

#[post("/api/users/courses/{course_id}/reviews")]
pub async fn submit_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SubmitReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match SubmitReviewCommand::new(
        user.user_id,
        CourseId::from(path.into_inner()),
        req.rating,
        req.comment,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.review.submit.execute(command).await {
        Ok(review) => ApiResponse::success(review),
        Err(e) => map_submit_error(e),
    }
}

fn map_submit_error(err: SubmitReviewError) -> HttpResponse {
    match err {
        SubmitReviewError::NotEnrolled => ApiResponse::forbidden(
            "NOT_ENROLLED",
            "Only enrolled students can review this course",
        ),
        SubmitReviewError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to save review");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/courses/{course_id}/reviews")]
pub async fn course_reviews_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .review
        .list_for_course
        .execute(CourseId::from(path.into_inner()))
        .await
    {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(ListCourseReviewsError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list course reviews");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/instructor/reviews")]
pub async fn instructor_reviews_handler(
    instructor: InstructorUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .review
        .list_for_instructor
        .execute(instructor.0.user_id)
        .await
    {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(ListInstructorReviewsError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list instructor reviews");
            ApiResponse::internal_error()
        }
    }
}
