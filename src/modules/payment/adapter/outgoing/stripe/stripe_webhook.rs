use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::payment::application::{
    domain::entities::PaymentEvent,
    ports::outgoing::{WebhookVerificationError, WebhookVerifier},
};

use super::stripe_gateway::StripeSession;

type HmacSha256 = Hmac<Sha256>;

pub const DEFAULT_TOLERANCE_SECS: i64 = 300;
const CHECKOUT_COMPLETED: &str = "checkout.session.completed";

#[derive(Deserialize)]
struct StripeEvent {
    #[serde(rename = "type")]
    event_type: String,
    data: StripeEventData,
}

#[derive(Deserialize)]
struct StripeEventData {
    object: serde_json::Value,
}

/// Checks the `Stripe-Signature` header: `t=<unix>,v1=<hex hmac>[,v1=...]`.
#[derive(Clone)]
pub struct StripeWebhookVerifier {
    secret: String,
    tolerance_secs: i64,
}

impl StripeWebhookVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
        }
    }

    fn invalid(reason: &str) -> WebhookVerificationError {
        WebhookVerificationError::InvalidSignature(reason.to_string())
    }

    pub(crate) fn verify_at(
        &self,
        payload: &[u8],
        signature_header: &str,
        now: i64,
    ) -> Result<PaymentEvent, WebhookVerificationError> {
        let mut timestamp = None;
        let mut signatures = Vec::new();
        for part in signature_header.split(',') {
            match part.trim().split_once('=') {
                Some(("t", value)) => timestamp = Some(value),
                Some(("v1", value)) => signatures.push(value),
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or_else(|| Self::invalid("missing timestamp"))?;
        let issued: i64 = timestamp
            .parse()
            .map_err(|_| Self::invalid("invalid timestamp"))?;
        if (now - issued).abs() > self.tolerance_secs {
            return Err(Self::invalid("timestamp outside tolerance"));
        }
        if signatures.is_empty() {
            return Err(Self::invalid("missing v1 signature"));
        }

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| Self::invalid("unusable webhook secret"))?;
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);

        let matched = signatures.iter().any(|candidate| {
            hex::decode(candidate)
                .map(|bytes| mac.clone().verify_slice(&bytes).is_ok())
                .unwrap_or(false)
        });
        if !matched {
            return Err(Self::invalid("no matching v1 signature"));
        }

        parse_event(payload)
    }
}

fn parse_event(payload: &[u8]) -> Result<PaymentEvent, WebhookVerificationError> {
    let event: StripeEvent = serde_json::from_slice(payload)
        .map_err(|e| WebhookVerificationError::MalformedEvent(e.to_string()))?;

    if event.event_type != CHECKOUT_COMPLETED {
        return Ok(PaymentEvent::Ignored(event.event_type));
    }

    let session: StripeSession = serde_json::from_value(event.data.object)
        .map_err(|e| WebhookVerificationError::MalformedEvent(e.to_string()))?;
    Ok(PaymentEvent::CheckoutCompleted(session.into_payment_session()))
}

impl WebhookVerifier for StripeWebhookVerifier {
    fn verify(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<PaymentEvent, WebhookVerificationError> {
        self.verify_at(payload, signature_header, chrono::Utc::now().timestamp())
    }
}
