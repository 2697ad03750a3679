use crate::payment::application::domain::entities::PaymentEvent;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WebhookVerificationError {
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Malformed event: {0}")]
    MalformedEvent(String),
}

/// Authenticates a provider callback and decodes the event it carries.
pub trait WebhookVerifier: Send + Sync {
    fn verify(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<PaymentEvent, WebhookVerificationError>;
}
