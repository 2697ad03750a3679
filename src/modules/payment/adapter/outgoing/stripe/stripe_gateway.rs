use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::payment::application::{
    domain::entities::{CheckoutSession, PaymentSession},
    ports::outgoing::{NewCheckout, PaymentGateway, PaymentGatewayError},
};

use super::StripeConfig;

/// Checkout session object as returned by the Stripe API.
#[derive(Debug, Deserialize)]
pub(super) struct StripeSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl StripeSession {
    fn metadata_uuid(&self, key: &str) -> Option<Uuid> {
        self.metadata.get(key).and_then(|v| Uuid::parse_str(v).ok())
    }

    pub(super) fn into_payment_session(self) -> PaymentSession {
        PaymentSession {
            user_id: self.metadata_uuid("user_id").map(UserId::from),
            course_id: self.metadata_uuid("course_id").map(CourseId::from),
            id: self.id,
            payment_status: self.payment_status,
        }
    }
}

#[derive(Deserialize)]
struct StripeApiError {
    error: StripeApiErrorDetail,
}

#[derive(Deserialize)]
struct StripeApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    config: StripeConfig,
}

impl std::fmt::Debug for StripeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeGateway")
            .field("api_base", &self.config.api_base)
            .field("currency", &self.config.currency)
            .finish()
    }
}

impl StripeGateway {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn checkout_form(&self, checkout: &NewCheckout) -> Vec<(String, String)> {
        let course_url = format!("{}/course/{}", self.config.client_url, checkout.course_id);
        vec![
            ("mode".into(), "payment".into()),
            ("payment_method_types[0]".into(), "card".into()),
            (
                "line_items[0][price_data][currency]".into(),
                self.config.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]".into(),
                checkout.product_name.clone(),
            ),
            (
                "line_items[0][price_data][product_data][description]".into(),
                checkout.description.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".into(),
                checkout.unit_amount_cents.to_string(),
            ),
            ("line_items[0][quantity]".into(), "1".into()),
            (
                "success_url".into(),
                format!("{course_url}?status=success&session_id={{CHECKOUT_SESSION_ID}}"),
            ),
            ("cancel_url".into(), format!("{course_url}?status=cancel")),
            ("metadata[user_id]".into(), checkout.user_id.to_string()),
            ("metadata[course_id]".into(), checkout.course_id.to_string()),
        ]
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<StripeSession, PaymentGatewayError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentGatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<StripeApiError>(&body) {
                return Err(PaymentGatewayError::Api(error.error.message));
            }
            return Err(PaymentGatewayError::Api(format!("HTTP {status}")));
        }

        serde_json::from_str(&body).map_err(|e| PaymentGatewayError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(
        &self,
        checkout: NewCheckout,
    ) -> Result<CheckoutSession, PaymentGatewayError> {
        let response = self
            .client
            .post(format!("{}/checkout/sessions", self.config.api_base))
            .bearer_auth(&self.config.secret_key)
            .form(&self.checkout_form(&checkout))
            .send()
            .await
            .map_err(|e| PaymentGatewayError::Network(e.to_string()))?;

        let session = self.handle_response(response).await?;
        let url = session
            .url
            .ok_or_else(|| PaymentGatewayError::Parse("checkout session has no url".to_string()))?;

        Ok(CheckoutSession {
            session_id: session.id,
            url,
        })
    }

    async fn retrieve_session(
        &self,
        session_id: &str,
    ) -> Result<PaymentSession, PaymentGatewayError> {
        let response = self
            .client
            .get(format!(
                "{}/checkout/sessions/{}",
                self.config.api_base, session_id
            ))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(|e| PaymentGatewayError::Network(e.to_string()))?;

        Ok(self.handle_response(response).await?.into_payment_session())
    }
}
