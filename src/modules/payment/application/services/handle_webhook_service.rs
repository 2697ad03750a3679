use async_trait::async_trait;
use std::sync::Arc;

use crate::enrollment::application::ports::incoming::use_cases::{
    GrantEnrollmentCommand, GrantEnrollmentUseCase,
};
use crate::payment::application::{
    domain::entities::{PaymentEvent, PaymentSession},
    ports::{
        incoming::use_cases::{HandleWebhookError, HandleWebhookUseCase},
        outgoing::{WebhookVerificationError, WebhookVerifier},
    },
};

pub struct HandleWebhookService<V>
where
    V: WebhookVerifier + Send + Sync,
{
    verifier: V,
    grant: Arc<dyn GrantEnrollmentUseCase + Send + Sync>,
}

impl<V> HandleWebhookService<V>
where
    V: WebhookVerifier + Send + Sync,
{
    pub fn new(verifier: V, grant: Arc<dyn GrantEnrollmentUseCase + Send + Sync>) -> Self {
        Self { verifier, grant }
    }

    async fn checkout_completed(&self, session: PaymentSession) {
        if !session.is_paid() {
            tracing::info!(session_id = %session.id, "Checkout completed without payment");
            return;
        }

        let (Some(user_id), Some(course_id)) = (session.user_id, session.course_id) else {
            tracing::warn!(session_id = %session.id, "Checkout session is missing metadata");
            return;
        };

        let command = GrantEnrollmentCommand::new(user_id, course_id, Some(session.id.clone()));
        match self.grant.execute(command).await {
            Ok(outcome) => tracing::info!(
                user_id = %user_id,
                course_id = %course_id,
                session_id = %session.id,
                created = outcome.created,
                "Enrollment granted from webhook"
            ),
            Err(e) => tracing::error!(
                user_id = %user_id,
                course_id = %course_id,
                session_id = %session.id,
                error = %e,
                "Failed to grant enrollment from webhook"
            ),
        }
    }
}

#[async_trait]
impl<V> HandleWebhookUseCase for HandleWebhookService<V>
where
    V: WebhookVerifier + Send + Sync,
{
    async fn execute(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<(), HandleWebhookError> {
        let event = match self.verifier.verify(payload, signature_header) {
            Ok(event) => event,
            Err(WebhookVerificationError::InvalidSignature(reason)) => {
                tracing::warn!(reason = %reason, "Rejected webhook");
                return Err(HandleWebhookError::InvalidSignature(reason));
            }
            Err(WebhookVerificationError::MalformedEvent(reason)) => {
                tracing::error!(reason = %reason, "Verified webhook could not be decoded");
                return Ok(());
            }
        };

        match event {
            PaymentEvent::CheckoutCompleted(session) => self.checkout_completed(session).await,
            PaymentEvent::Ignored(event_type) => {
                tracing::debug!(event_type = %event_type, "Ignoring webhook event")
            }
        }

        Ok(())
    }
}
