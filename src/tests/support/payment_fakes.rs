use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::payment::application::{
    domain::entities::{CheckoutSession, PaymentEvent, PaymentSession, PAID},
    ports::outgoing::{
        NewCheckout, PaymentGateway, PaymentGatewayError, WebhookVerificationError,
        WebhookVerifier,
    },
};

pub fn paid_session(user_id: UserId, course_id: CourseId) -> PaymentSession {
    PaymentSession {
        id: "cs_test_paid".to_string(),
        payment_status: PAID.to_string(),
        user_id: Some(user_id),
        course_id: Some(course_id),
    }
}

/// Payment provider double. Records checkouts and serves one stored session.
#[derive(Clone, Default)]
pub struct FakePaymentGateway {
    checkouts: Arc<Mutex<Vec<NewCheckout>>>,
    session: Option<PaymentSession>,
    fail: bool,
}

impl FakePaymentGateway {
    pub fn with_session(session: PaymentSession) -> Self {
        Self {
            session: Some(session),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn checkouts(&self) -> Vec<NewCheckout> {
        self.checkouts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for FakePaymentGateway {
    async fn create_checkout_session(
        &self,
        checkout: NewCheckout,
    ) -> Result<CheckoutSession, PaymentGatewayError> {
        if self.fail {
            return Err(PaymentGatewayError::Network("connection refused".to_string()));
        }
        self.checkouts.lock().unwrap().push(checkout);
        Ok(CheckoutSession {
            session_id: "cs_test_new".to_string(),
            url: "https://checkout.stripe.test/c/pay/cs_test_new".to_string(),
        })
    }

    async fn retrieve_session(
        &self,
        session_id: &str,
    ) -> Result<PaymentSession, PaymentGatewayError> {
        if self.fail {
            return Err(PaymentGatewayError::Network("connection refused".to_string()));
        }
        self.session
            .clone()
            .filter(|s| s.id == session_id)
            .ok_or_else(|| PaymentGatewayError::Api("No such checkout.session".to_string()))
    }
}

/// Accepts the signature `valid` and returns a fixed event.
#[derive(Clone)]
pub struct StaticWebhookVerifier {
    pub event: PaymentEvent,
}

impl WebhookVerifier for StaticWebhookVerifier {
    fn verify(
        &self,
        _payload: &[u8],
        signature_header: &str,
    ) -> Result<PaymentEvent, WebhookVerificationError> {
        if signature_header != "valid" {
            return Err(WebhookVerificationError::InvalidSignature(
                "no matching v1 signature".to_string(),
            ));
        }
        Ok(self.event.clone())
    }
}
