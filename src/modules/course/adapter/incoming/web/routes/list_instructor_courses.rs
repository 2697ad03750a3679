use actix_web::{get, web, Responder};

use crate::auth::adapter::incoming::web::extractors::InstructorUser;
use crate::course::application::ports::incoming::use_cases::ListInstructorCoursesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/instructor/courses")]
pub async fn list_instructor_courses_handler(
    instructor: InstructorUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .course
        .list_for_instructor
        .execute(instructor.0.user_id)
        .await
    {
        Ok(courses) => ApiResponse::success(courses),
        Err(ListInstructorCoursesError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list instructor courses");
            ApiResponse::internal_error()
        }
    }
}
