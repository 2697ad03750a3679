use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

pub const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct AskTutorCommand {
    user_id: UserId,
    message: String,
    context: Option<String>,
    course_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AskTutorCommandError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message must be at most 2000 characters")]
    MessageTooLong,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AskTutorCommand {
    pub fn new(
        user_id: UserId,
        message: String,
        context: Option<String>,
        course_title: Option<String>,
    ) -> Result<Self, AskTutorCommandError> {
        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(AskTutorCommandError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(AskTutorCommandError::MessageTooLong);
        }

        Ok(Self {
            user_id,
            message,
            context: non_blank(context),
            course_title: non_blank(course_title),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn course_title(&self) -> Option<&str> {
        self.course_title.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AskTutorError {
    #[error("AI tutor is not configured")]
    NotConfigured,

    #[error("AI provider error: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait AskTutorUseCase: Send + Sync {
    async fn execute(&self, command: AskTutorCommand) -> Result<String, AskTutorError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[test]
    fn blank_message_is_rejected() {
        let result = AskTutorCommand::new(user(), "  ".to_string(), None, None);

        assert_eq!(result, Err(AskTutorCommandError::EmptyMessage));
    }

    #[test]
    fn long_message_is_rejected() {
        let result = AskTutorCommand::new(user(), "a".repeat(MAX_MESSAGE_LEN + 1), None, None);

        assert_eq!(result, Err(AskTutorCommandError::MessageTooLong));
    }

    #[test]
    fn blank_optionals_are_dropped() {
        let command = AskTutorCommand::new(
            user(),
            "Explain lifetimes".to_string(),
            Some(" ".to_string()),
            Some("Rust".to_string()),
        )
        .unwrap();

        assert_eq!(command.context(), None);
        assert_eq!(command.course_title(), Some("Rust"));
    }
}
