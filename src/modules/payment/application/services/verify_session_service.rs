use async_trait::async_trait;
use std::sync::Arc;

use crate::enrollment::application::ports::incoming::use_cases::{
    GrantEnrollmentCommand, GrantEnrollmentError, GrantEnrollmentUseCase, GrantOutcome,
};
use crate::payment::application::ports::{
    incoming::use_cases::{VerifySessionCommand, VerifySessionError, VerifySessionUseCase},
    outgoing::PaymentGateway,
};

/// Confirms a checkout from the success redirect.
pub struct VerifySessionService<G>
where
    G: PaymentGateway + Send + Sync,
{
    gateway: G,
    grant: Arc<dyn GrantEnrollmentUseCase + Send + Sync>,
}

impl<G> VerifySessionService<G>
where
    G: PaymentGateway + Send + Sync,
{
    pub fn new(gateway: G, grant: Arc<dyn GrantEnrollmentUseCase + Send + Sync>) -> Self {
        Self { gateway, grant }
    }
}

#[async_trait]
impl<G> VerifySessionUseCase for VerifySessionService<G>
where
    G: PaymentGateway + Send + Sync,
{
    async fn execute(
        &self,
        command: VerifySessionCommand,
    ) -> Result<GrantOutcome, VerifySessionError> {
        let session = self
            .gateway
            .retrieve_session(command.session_id())
            .await
            .map_err(|e| VerifySessionError::GatewayError(e.to_string()))?;

        if session.user_id != Some(command.user_id()) {
            tracing::warn!(
                user_id = %command.user_id(),
                session_id = %session.id,
                "Checkout session verified by a different user"
            );
            return Err(VerifySessionError::SessionOwnerMismatch);
        }

        if !session.is_paid() {
            return Err(VerifySessionError::PaymentNotCompleted);
        }

        let course_id = session.course_id.ok_or(VerifySessionError::InvalidSession)?;

        self.grant
            .execute(GrantEnrollmentCommand::new(
                command.user_id(),
                course_id,
                Some(session.id),
            ))
            .await
            .map_err(|e| match e {
                GrantEnrollmentError::CourseNotFound => VerifySessionError::CourseNotFound,
                GrantEnrollmentError::RepositoryError(e) => VerifySessionError::RepositoryError(e),
            })
    }
}
