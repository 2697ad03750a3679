mod create_checkout_session;
mod handle_webhook;
mod verify_session;

pub use create_checkout_session::{CreateCheckoutSessionError, CreateCheckoutSessionUseCase};
pub use handle_webhook::{HandleWebhookError, HandleWebhookUseCase};
pub use verify_session::{
    VerifySessionCommand, VerifySessionCommandError, VerifySessionError, VerifySessionUseCase,
};
