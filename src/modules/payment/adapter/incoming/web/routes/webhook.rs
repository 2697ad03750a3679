use actix_web::{post, web, HttpRequest, Responder};
use serde_json::json;

use crate::payment::application::ports::incoming::use_cases::HandleWebhookError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const SIGNATURE_HEADER: &str = "Stripe-Signature";

/// Raw body is required; the signature covers the exact bytes sent.
#[post("/api/payment/webhook")]
pub async fn payment_webhook_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(signature) = req
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
    else {
        return ApiResponse::bad_request("INVALID_SIGNATURE", "Missing Stripe-Signature header");
    };

    match data.payment.webhook.execute(&body, signature).await {
        Ok(()) => ApiResponse::success(json!({ "received": true })),
        Err(HandleWebhookError::InvalidSignature(_)) => {
            ApiResponse::bad_request("INVALID_SIGNATURE", "Webhook signature verification failed")
        }
    }
}
