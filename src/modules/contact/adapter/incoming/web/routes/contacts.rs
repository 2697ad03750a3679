use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::contact::application::domain::entities::ContactStatus;
use crate::contact::application::ports::incoming::use_cases::{
    ListContactsError, ReplyContactCommand, ReplyContactError, SubmitContactCommand,
    SubmitContactError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<SubmitContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command =
        match SubmitContactCommand::new(req.name, req.email, req.subject, req.message) {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.contact.submit.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(SubmitContactError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Failed to store contact message");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListContactsQuery {
    pub status: Option<String>,
}

#[get("/api/admin/contacts")]
pub async fn list_contacts_handler(
    _admin: AdminUser,
    query: web::Query<ListContactsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match query.into_inner().status.as_deref() {
        None | Some("") => None,
        Some(raw) => match ContactStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                return ApiResponse::bad_request(
                    "INVALID_STATUS",
                    "Status must be 'new' or 'replied'",
                )
            }
        },
    };

    match data.contact.list.execute(status).await {
        Ok(messages) => ApiResponse::success(messages),
        Err(ListContactsError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list contact messages");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplyContactRequest {
    pub subject: String,
    pub body: String,
}

#[post("/api/admin/contacts/{id}/reply")]
pub async fn reply_contact_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ReplyContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match ReplyContactCommand::new(path.into_inner(), req.subject, req.body) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.contact.reply.execute(command).await {
        Ok(message) => ApiResponse::success(message),
        Err(e) => map_reply_error(e),
    }
}

fn map_reply_error(err: ReplyContactError) -> HttpResponse {
    match err {
        ReplyContactError::NotFound => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact message not found")
        }
        ReplyContactError::AlreadyReplied => {
            ApiResponse::conflict("ALREADY_REPLIED", "This message has already been replied to")
        }
        ReplyContactError::EmailDeliveryFailed(_) => ApiResponse::bad_gateway(
            "EMAIL_DELIVERY_FAILED",
            "The reply email could not be delivered",
        ),
        ReplyContactError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to reply to contact message");
            ApiResponse::internal_error()
        }
    }
}
