use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::auth::adapter::incoming::web::extractors::InstructorUser;
use crate::media::application::domain::entities::UploadKind;
use crate::media::application::ports::incoming::use_cases::{
    CreateUploadUrlCommand, CreateUploadUrlError, UploadUrlCommandError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUploadRequest {
    pub kind: UploadKind,
    pub file_name: String,
    pub mime_type: String,
    pub file_size_bytes: u64,
}

#[post("/api/instructor/uploads")]
pub async fn create_upload_handler(
    instructor: InstructorUser,
    req: web::Json<CreateUploadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match CreateUploadUrlCommand::new(
        instructor.0.user_id,
        req.kind,
        &req.file_name,
        &req.mime_type,
        req.file_size_bytes,
        &data.media.policy,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.media.create_upload_url.execute(command).await {
        Ok(ticket) => ApiResponse::created(ticket),
        Err(CreateUploadUrlError::InstructorNotApproved) => ApiResponse::forbidden(
            "INSTRUCTOR_NOT_APPROVED",
            "Your instructor account is awaiting approval",
        ),
        Err(CreateUploadUrlError::StorageError(e)) => {
            tracing::error!(error = %e, "Storage error creating upload URL");
            ApiResponse::bad_gateway("STORAGE_ERROR", "Failed to generate upload URL")
        }
        Err(CreateUploadUrlError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Repository error creating upload URL");
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(e: UploadUrlCommandError) -> HttpResponse {
    let code = match e {
        UploadUrlCommandError::InvalidFileName => "INVALID_FILE_NAME",
        UploadUrlCommandError::EmptyFile | UploadUrlCommandError::FileTooLarge { .. } => {
            "INVALID_FILE_SIZE"
        }
        UploadUrlCommandError::InvalidMimeType(_) => "INVALID_MIME_TYPE",
        UploadUrlCommandError::MimeExtensionMismatch { .. } => "MIME_EXTENSION_MISMATCH",
    };
    ApiResponse::bad_request(code, &e.to_string())
}
