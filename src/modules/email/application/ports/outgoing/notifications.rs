use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    #[error("Email delivery failed: {0}")]
    DeliveryFailed(String),
}

#[derive(Debug, Clone)]
pub struct EnrollmentNotice {
    pub student_name: String,
    pub student_email: String,
    pub course_title: String,
    pub course_id: uuid::Uuid,
}

#[async_trait]
pub trait EnrollmentNotifier: Send + Sync {
    async fn enrollment_confirmed(&self, notice: EnrollmentNotice) -> Result<(), NotificationError>;
}

#[async_trait]
pub trait ContactReplyNotifier: Send + Sync {
    async fn send_contact_reply(
        &self,
        to_name: &str,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError>;
}
