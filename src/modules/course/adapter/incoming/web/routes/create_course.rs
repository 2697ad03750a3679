use actix_web::{post, web, HttpResponse, Responder};

use crate::auth::adapter::incoming::web::extractors::InstructorUser;
use crate::course::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError, CreateCourseInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/instructor/courses")]
pub async fn create_course_handler(
    instructor: InstructorUser,
    req: web::Json<CreateCourseInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateCourseCommand::new(instructor.0.user_id, req.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.course.create.execute(command).await {
        Ok(course) => ApiResponse::created(course),
        Err(e) => map_create_error(e),
    }
}

fn map_create_error(err: CreateCourseError) -> HttpResponse {
    match err {
        CreateCourseError::InstructorNotApproved => ApiResponse::forbidden(
            "INSTRUCTOR_NOT_APPROVED",
            "Your instructor account is awaiting approval",
        ),
        CreateCourseError::CategoryNotFound(name) => ApiResponse::bad_request(
            "CATEGORY_NOT_FOUND",
            &format!("Category '{name}' does not exist"),
        ),
        CreateCourseError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to create course");
            ApiResponse::internal_error()
        }
    }
}
