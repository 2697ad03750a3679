use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::CourseId;
use crate::progress::application::ports::incoming::use_cases::{
    GetProgressError, ToggleLessonCommand, ToggleLessonError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ToggleLessonRequest {
    pub lesson_id: Uuid,
}

fn not_enrolled() -> HttpResponse {
    ApiResponse::forbidden("NOT_ENROLLED", "You are not enrolled in this course")
}

#[get("/api/users/courses/{course_id}/progress")]
pub async fn get_progress_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .progress
        .get
        .execute(user.user_id, CourseId::from(path.into_inner()))
        .await
    {
        Ok(progress) => ApiResponse::success(progress),
        Err(GetProgressError::NotEnrolled) => not_enrolled(),
        Err(GetProgressError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(GetProgressError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Failed to load progress");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/users/courses/{course_id}/progress")]
pub async fn toggle_lesson_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ToggleLessonRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = ToggleLessonCommand::new(
        user.user_id,
        CourseId::from(path.into_inner()),
        req.lesson_id,
    );

    match data.progress.toggle_lesson.execute(command).await {
        Ok(progress) => ApiResponse::success(progress),
        Err(e) => map_toggle_error(e),
    }
}

fn map_toggle_error(err: ToggleLessonError) -> HttpResponse {
    match err {
        ToggleLessonError::NotEnrolled => not_enrolled(),
        ToggleLessonError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        ToggleLessonError::UnknownLesson => {
            ApiResponse::bad_request("UNKNOWN_LESSON", "Lesson does not belong to this course")
        }
        ToggleLessonError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to update progress");
            ApiResponse::internal_error()
        }
    }
}
