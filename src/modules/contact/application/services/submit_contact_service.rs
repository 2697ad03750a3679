use async_trait::async_trait;

use crate::contact::application::{
    domain::entities::{ContactMessage, ContactStatus},
    ports::{
        incoming::use_cases::{
            ListContactsError, ListContactsUseCase, SubmitContactCommand, SubmitContactError,
            SubmitContactUseCase,
        },
        outgoing::ContactRepository,
    },
};

pub struct SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactMessage, SubmitContactError> {
        let message = self
            .repository
            .create(command.into_data())
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        tracing::info!(contact_id = %message.id, "Contact message received");
        Ok(message)
    }
}

pub struct ListContactsService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListContactsService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactsUseCase for ListContactsService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<ContactMessage>, ListContactsError> {
        self.repository
            .list(status)
            .await
            .map_err(|e| ListContactsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::contact_fakes::{sample_message, FakeContactStore};

    fn command() -> SubmitContactCommand {
        SubmitContactCommand::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Question".to_string(),
            "Do you offer team plans?".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn stores_new_message() {
        let store = FakeContactStore::default();
        let service = SubmitContactService::new(store.clone());

        let message = service.execute(command()).await.unwrap();

        assert_eq!(message.status, ContactStatus::New);
        assert_eq!(store.messages().len(), 1);
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let service = SubmitContactService::new(FakeContactStore::failing());

        let result = service.execute(command()).await;

        assert!(matches!(result, Err(SubmitContactError::RepositoryError(_))));
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let mut replied = sample_message();
        replied.status = ContactStatus::Replied;
        let store = FakeContactStore::with_message(replied);
        store.create(command().into_data()).await.unwrap();
        let service = ListContactsService::new(store);

        let new_only = service.execute(Some(ContactStatus::New)).await.unwrap();
        let all = service.execute(None).await.unwrap();

        assert_eq!(new_only.len(), 1);
        assert_eq!(new_only[0].subject, "Question");
        assert_eq!(all.len(), 2);
    }
}
