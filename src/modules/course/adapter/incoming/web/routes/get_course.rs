use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::incoming::use_cases::{CourseViewer, GetCourseError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/courses/{course_id}")]
pub async fn get_course_handler(
    user: OptionalUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let viewer = user.0.map(|u| CourseViewer {
        user_id: u.user_id,
        role: u.role,
    });

    match data
        .course
        .get
        .execute(CourseId::from(path.into_inner()), viewer)
        .await
    {
        Ok(details) => ApiResponse::success(details),
        Err(GetCourseError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(GetCourseError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to load course");
            ApiResponse::internal_error()
        }
    }
}
