use async_trait::async_trait;

use crate::tutor::application::{
    domain::prompt::build_prompt,
    ports::{
        incoming::use_cases::{AskTutorCommand, AskTutorError, AskTutorUseCase},
        outgoing::{TextGenerationError, TextGenerator},
    },
};

pub struct AskTutorService<G>
where
    G: TextGenerator + Send + Sync,
{
    generator: G,
}

impl<G> AskTutorService<G>
where
    G: TextGenerator + Send + Sync,
{
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl<G> AskTutorUseCase for AskTutorService<G>
where
    G: TextGenerator + Send + Sync,
{
    async fn execute(&self, command: AskTutorCommand) -> Result<String, AskTutorError> {
        let prompt = build_prompt(
            command.message(),
            command.context(),
            command.course_title(),
        );

        match self.generator.generate(&prompt).await {
            Ok(reply) => {
                tracing::info!(
                    user_id = %command.user_id(),
                    reply_len = reply.len(),
                    "Tutor replied"
                );
                Ok(reply)
            }
            Err(TextGenerationError::NotConfigured) => Err(AskTutorError::NotConfigured),
            Err(TextGenerationError::Upstream(e)) => {
                tracing::error!(user_id = %command.user_id(), error = %e, "Tutor request failed");
                Err(AskTutorError::Upstream(e))
            }
        }
    }
}
