use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HandleWebhookError {
    #[error("Invalid webhook signature: {0}")]
    InvalidSignature(String),
}

/// Processes a provider callback. Only authentication failures surface as
/// errors; enrollment problems are logged so the provider does not retry.
#[async_trait]
pub trait HandleWebhookUseCase: Send + Sync {
    async fn execute(&self, payload: &[u8], signature_header: &str)
        -> Result<(), HandleWebhookError>;
}
