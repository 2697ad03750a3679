use actix_web::{get, patch, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::course::application::domain::entities::{CourseId, CourseStatus};
use crate::course::application::ports::incoming::use_cases::{
    ListAllCoursesError, SetCourseStatusError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AdminCoursesQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetCourseStatusRequest {
    pub status: String,
}

fn parse_status(raw: &str) -> Result<CourseStatus, actix_web::HttpResponse> {
    CourseStatus::parse(raw.trim()).ok_or_else(|| {
        ApiResponse::bad_request("INVALID_STATUS", &format!("Unknown status '{raw}'"))
    })
}

#[get("/api/admin/courses")]
pub async fn admin_list_courses_handler(
    _admin: AdminUser,
    query: web::Query<AdminCoursesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match query.status.as_deref().filter(|s| !s.trim().is_empty()) {
        None => None,
        Some(raw) => match parse_status(raw) {
            Ok(status) => Some(status),
            Err(resp) => return resp,
        },
    };

    match data.course.list_all.execute(status).await {
        Ok(courses) => ApiResponse::success(courses),
        Err(ListAllCoursesError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list courses for admin");
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/courses/{course_id}/status")]
pub async fn set_course_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SetCourseStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match parse_status(&req.status) {
        Ok(status) => status,
        Err(resp) => return resp,
    };

    match data
        .course
        .set_status
        .execute(CourseId::from(path.into_inner()), status)
        .await
    {
        Ok(course) => ApiResponse::success(course),
        Err(SetCourseStatusError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(SetCourseStatusError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Failed to change course status");
            ApiResponse::internal_error()
        }
    }
}
