use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextGenerationError {
    #[error("Text generation is not configured")]
    NotConfigured,

    #[error("Upstream model error: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, TextGenerationError>;
}
