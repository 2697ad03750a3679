use async_trait::async_trait;
use std::sync::Arc;

use crate::contact::application::{
    domain::entities::ContactMessage,
    ports::{
        incoming::use_cases::{ReplyContactCommand, ReplyContactError, ReplyContactUseCase},
        outgoing::{ContactRepository, ContactRepositoryError},
    },
};
use crate::email::application::ports::outgoing::ContactReplyNotifier;

/// Emails the reply first; the message is only marked replied once delivery succeeds.
pub struct ReplyContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
    notifier: Arc<dyn ContactReplyNotifier + Send + Sync>,
}

impl<R> ReplyContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R, notifier: Arc<dyn ContactReplyNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

fn map_repo_err(e: ContactRepositoryError) -> ReplyContactError {
    match e {
        ContactRepositoryError::NotFound => ReplyContactError::NotFound,
        ContactRepositoryError::AlreadyReplied => ReplyContactError::AlreadyReplied,
        ContactRepositoryError::DatabaseError(e) => ReplyContactError::RepositoryError(e),
    }
}

#[async_trait]
impl<R> ReplyContactUseCase for ReplyContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ReplyContactCommand,
    ) -> Result<ContactMessage, ReplyContactError> {
        let message = self
            .repository
            .find(command.message_id())
            .await
            .map_err(map_repo_err)?
            .ok_or(ReplyContactError::NotFound)?;

        if message.is_replied() {
            return Err(ReplyContactError::AlreadyReplied);
        }

        if let Err(e) = self
            .notifier
            .send_contact_reply(&message.name, &message.email, command.subject(), command.body())
            .await
        {
            tracing::error!(contact_id = %message.id, error = %e, "Contact reply not delivered");
            return Err(ReplyContactError::EmailDeliveryFailed(e.to_string()));
        }

        let updated = self
            .repository
            .mark_replied(message.id, command.subject(), command.body())
            .await
            .map_err(map_repo_err)?;

        tracing::info!(contact_id = %updated.id, "Contact message replied");
        Ok(updated)
    }
}
