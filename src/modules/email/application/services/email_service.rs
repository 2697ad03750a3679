use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    ContactReplyNotifier, EmailSender, EnrollmentNotice, EnrollmentNotifier, NotificationError,
};
use crate::email::application::templates;

/// Renders notification templates and hands them to the configured sender.
#[derive(Clone)]
pub struct EmailNotificationService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    client_url: String,
}

impl fmt::Debug for EmailNotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailNotificationService")
            .field("sender", &"<dyn EmailSender>")
            .field("client_url", &self.client_url)
            .finish()
    }
}

impl EmailNotificationService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, client_url: impl Into<String>) -> Self {
        Self {
            sender,
            client_url: client_url.into(),
        }
    }
}

#[async_trait]
impl EnrollmentNotifier for EmailNotificationService {
    async fn enrollment_confirmed(&self, notice: EnrollmentNotice) -> Result<(), NotificationError> {
        let (subject, body) = templates::enrollment_confirmation(
            &notice.student_name,
            &notice.course_title,
            notice.course_id,
            &self.client_url,
        );

        self.sender
            .send_email(&notice.student_email, &subject, &body)
            .await
            .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))
    }
}

#[async_trait]
impl ContactReplyNotifier for EmailNotificationService {
    async fn send_contact_reply(
        &self,
        to_name: &str,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError> {
        let html = templates::contact_reply(to_name, body);

        self.sender
            .send_email(to_email, subject, &html)
            .await
            .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))
    }
}
