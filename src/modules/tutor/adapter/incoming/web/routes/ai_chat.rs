use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::tutor::application::ports::incoming::use_cases::{AskTutorCommand, AskTutorError};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AiChatRequest {
    pub message: String,
    pub context: Option<String>,
    pub course_title: Option<String>,
}

#[post("/api/users/ai-chat")]
pub async fn ai_chat_handler(
    user: AuthenticatedUser,
    req: web::Json<AiChatRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match AskTutorCommand::new(user.user_id, req.message, req.context, req.course_title)
    {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.tutor.ask.execute(command).await {
        Ok(reply) => ApiResponse::success(json!({ "reply": reply })),
        Err(AskTutorError::NotConfigured) => ApiResponse::service_unavailable(
            "AI_NOT_CONFIGURED",
            "AI service is not configured on this server",
        ),
        Err(AskTutorError::Upstream(_)) => ApiResponse::bad_gateway(
            "AI_UPSTREAM_ERROR",
            "Failed to get a response from the AI service",
        ),
    }
}
