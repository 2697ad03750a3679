use actix_web::{get, web, Responder};

use crate::auth::adapter::incoming::web::extractors::{
    AdminUser, AuthenticatedUser, InstructorUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/users/my-courses")]
pub async fn my_courses_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.enrollment.my_courses.execute(user.user_id).await {
        Ok(courses) => ApiResponse::success(courses),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list enrolled courses");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/instructor/students")]
pub async fn instructor_students_handler(
    instructor: InstructorUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .enrollment
        .instructor_students
        .execute(instructor.0.user_id)
        .await
    {
        Ok(students) => ApiResponse::success(students),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list students");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/enrollments")]
pub async fn admin_enrollments_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.enrollment.list_all.execute().await {
        Ok(enrollments) => ApiResponse::success(enrollments),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list enrollments");
            ApiResponse::internal_error()
        }
    }
}
