use std::env;

#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub webhook_secret: String,
    pub currency: String,
    pub api_base: String,
    /// Frontend origin used for the checkout redirects.
    pub client_url: String,
}

impl StripeConfig {
    /// Loads Stripe settings from the environment. Panics when keys are missing.
    pub fn from_env() -> Self {
        let secret_key = env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY must be set");
        let webhook_secret =
            env::var("STRIPE_WEBHOOK_SECRET").expect("STRIPE_WEBHOOK_SECRET must be set");

        Self {
            secret_key,
            webhook_secret,
            currency: env::var("STRIPE_CURRENCY")
                .unwrap_or_else(|_| "inr".to_string())
                .to_lowercase(),
            api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            client_url: env::var("CLIENT_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}
