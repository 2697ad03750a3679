use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminUser, InstructorUser};
use crate::course::application::domain::entities::{CourseAccess, CourseId};
use crate::course::application::ports::incoming::use_cases::DeleteCourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/instructor/courses/{course_id}")]
pub async fn delete_instructor_course_handler(
    instructor: InstructorUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let access = CourseAccess::Owner(instructor.0.user_id);
    delete_course(&data, path.into_inner(), access).await
}

#[delete("/api/admin/courses/{course_id}")]
pub async fn admin_delete_course_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_course(&data, path.into_inner(), CourseAccess::Admin).await
}

async fn delete_course(data: &AppState, course_id: Uuid, access: CourseAccess) -> HttpResponse {
    match data
        .course
        .delete
        .execute(CourseId::from(course_id), access)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCourseError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(DeleteCourseError::RepositoryError(e)) => {
            tracing::error!(error = %e, course_id = %course_id, "Failed to delete course");
            ApiResponse::internal_error()
        }
    }
}
