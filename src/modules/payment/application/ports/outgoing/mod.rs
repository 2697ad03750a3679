pub mod payment_gateway;
pub mod webhook_verifier;

pub use payment_gateway::{NewCheckout, PaymentGateway, PaymentGatewayError};
pub use webhook_verifier::{WebhookVerificationError, WebhookVerifier};
