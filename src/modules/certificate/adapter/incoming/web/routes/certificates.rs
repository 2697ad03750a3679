use actix_web::{get, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::certificate::application::ports::incoming::use_cases::{
    GetCertificateError, IssueCertificateError, ListMyCertificatesError,
};
use crate::course::application::domain::entities::CourseId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/users/courses/{course_id}/certificate")]
pub async fn issue_certificate_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .certificate
        .issue
        .execute(user.user_id, CourseId::from(path.into_inner()))
        .await
    {
        Ok(issued) if issued.created => ApiResponse::created(issued.certificate),
        Ok(issued) => ApiResponse::success(issued.certificate),
        Err(e) => map_issue_error(e),
    }
}

fn map_issue_error(err: IssueCertificateError) -> HttpResponse {
    match err {
        IssueCertificateError::NotEnrolled => {
            ApiResponse::forbidden("NOT_ENROLLED", "You are not enrolled in this course")
        }
        IssueCertificateError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        IssueCertificateError::CourseNotCompleted => ApiResponse::bad_request(
            "COURSE_NOT_COMPLETED",
            "Complete every lesson before requesting a certificate",
        ),
        IssueCertificateError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to issue certificate");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/users/courses/{course_id}/certificate")]
pub async fn get_certificate_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .certificate
        .get
        .execute(user.user_id, CourseId::from(path.into_inner()))
        .await
    {
        Ok(certificate) => ApiResponse::success(certificate),
        Err(GetCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }
        Err(GetCertificateError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Failed to load certificate");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/users/certificates")]
pub async fn my_certificates_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certificate.list_mine.execute(user.user_id).await {
        Ok(certificates) => ApiResponse::success(certificates),
        Err(ListMyCertificatesError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list certificates");
            ApiResponse::internal_error()
        }
    }
}
