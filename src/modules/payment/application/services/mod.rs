mod create_checkout_session_service;
mod handle_webhook_service;
mod verify_session_service;

pub use create_checkout_session_service::CreateCheckoutSessionService;
pub use handle_webhook_service::HandleWebhookService;
pub use verify_session_service::VerifySessionService;
