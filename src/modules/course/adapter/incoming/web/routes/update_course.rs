use actix_web::{patch, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::InstructorUser;
use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::incoming::use_cases::{
    UpdateCourseCommand, UpdateCourseError, UpdateCourseInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[patch("/api/instructor/courses/{course_id}")]
pub async fn update_course_handler(
    instructor: InstructorUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCourseInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateCourseCommand::new(
        CourseId::from(path.into_inner()),
        instructor.0.user_id,
        req.into_inner(),
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.course.update.execute(command).await {
        Ok(course) => ApiResponse::success(course),
        Err(e) => map_update_error(e),
    }
}

fn map_update_error(err: UpdateCourseError) -> HttpResponse {
    match err {
        UpdateCourseError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        UpdateCourseError::CategoryNotFound(name) => ApiResponse::bad_request(
            "CATEGORY_NOT_FOUND",
            &format!("Category '{name}' does not exist"),
        ),
        UpdateCourseError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to update course");
            ApiResponse::internal_error()
        }
    }
}
