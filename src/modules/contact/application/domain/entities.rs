use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Replied,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Replied => "replied",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "new" => Some(ContactStatus::New),
            "replied" => Some(ContactStatus::Replied),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactReply {
    pub subject: String,
    pub body: String,
    pub replied_at: DateTime<Utc>,
}

/// Message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub reply: Option<ContactReply>,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn is_replied(&self) -> bool {
        self.status == ContactStatus::Replied
    }
}
