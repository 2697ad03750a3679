mod stripe_config;
mod stripe_gateway;
mod stripe_webhook;

pub use stripe_config::StripeConfig;
pub use stripe_gateway::StripeGateway;
pub use stripe_webhook::StripeWebhookVerifier;
