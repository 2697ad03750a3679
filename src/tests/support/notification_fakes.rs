use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::email::application::ports::outgoing::{
    ContactReplyNotifier, EnrollmentNotice, EnrollmentNotifier, NotificationError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SentReply {
    pub to_name: String,
    pub to_email: String,
    pub subject: String,
    pub body: String,
}

/// Records every notification; `failing()` reports delivery errors after recording.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    enrollments: Arc<Mutex<Vec<EnrollmentNotice>>>,
    replies: Arc<Mutex<Vec<SentReply>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn enrollment_notices(&self) -> Vec<EnrollmentNotice> {
        self.enrollments.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<SentReply> {
        self.replies.lock().unwrap().clone()
    }

    fn outcome(&self) -> Result<(), NotificationError> {
        if self.fail {
            return Err(NotificationError::DeliveryFailed("smtp down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EnrollmentNotifier for RecordingNotifier {
    async fn enrollment_confirmed(&self, notice: EnrollmentNotice) -> Result<(), NotificationError> {
        self.enrollments.lock().unwrap().push(notice);
        self.outcome()
    }
}

#[async_trait]
impl ContactReplyNotifier for RecordingNotifier {
    async fn send_contact_reply(
        &self,
        to_name: &str,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError> {
        self.replies.lock().unwrap().push(SentReply {
            to_name: to_name.to_string(),
            to_email: to_email.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        self.outcome()
    }
}
