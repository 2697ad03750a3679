use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    payment::application::domain::entities::{CheckoutSession, PaymentSession},
};

/// One-item purchase of a course.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckout {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub product_name: String,
    pub description: String,
    pub unit_amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentGatewayError {
    #[error("Payment provider request failed: {0}")]
    Network(String),

    #[error("Payment provider rejected the request: {0}")]
    Api(String),

    #[error("Unexpected payment provider response: {0}")]
    Parse(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_checkout_session(
        &self,
        checkout: NewCheckout,
    ) -> Result<CheckoutSession, PaymentGatewayError>;

    async fn retrieve_session(&self, session_id: &str)
        -> Result<PaymentSession, PaymentGatewayError>;
}
