use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::{ContactMessage, ContactReply, ContactStatus},
    ports::outgoing::{ContactRepository, ContactRepositoryError, NewContactMessage},
};

pub fn sample_message() -> ContactMessage {
    ContactMessage {
        id: Uuid::new_v4(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Invoice".to_string(),
        message: "Where is my invoice?".to_string(),
        status: ContactStatus::New,
        reply: None,
        created_at: Utc::now(),
    }
}

/// In-memory contact_messages table.
#[derive(Clone, Default)]
pub struct FakeContactStore {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
    fail: bool,
}

impl FakeContactStore {
    pub fn with_message(message: ContactMessage) -> Self {
        let store = Self::default();
        store.messages.lock().unwrap().push(message);
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ContactRepositoryError> {
        if self.fail {
            return Err(ContactRepositoryError::DatabaseError("boom".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for FakeContactStore {
    async fn create(&self, data: NewContactMessage) -> Result<ContactMessage, ContactRepositoryError> {
        self.check()?;
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            status: ContactStatus::New,
            reply: None,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn find(&self, id: Uuid) -> Result<Option<ContactMessage>, ContactRepositoryError> {
        self.check()?;
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn list(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        self.check()?;
        let mut messages: Vec<ContactMessage> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| status.map_or(true, |s| m.status == s))
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn mark_replied(
        &self,
        id: Uuid,
        subject: &str,
        body: &str,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        self.check()?;
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ContactRepositoryError::NotFound)?;
        if message.is_replied() {
            return Err(ContactRepositoryError::AlreadyReplied);
        }
        message.status = ContactStatus::Replied;
        message.reply = Some(ContactReply {
            subject: subject.to_string(),
            body: body.to_string(),
            replied_at: Utc::now(),
        });
        Ok(message.clone())
    }
}
