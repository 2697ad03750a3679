use std::sync::Arc;

use crate::payment::application::ports::incoming::use_cases::{
    CreateCheckoutSessionUseCase, HandleWebhookUseCase, VerifySessionUseCase,
};

#[derive(Clone)]
pub struct PaymentUseCases {
    pub checkout: Arc<dyn CreateCheckoutSessionUseCase + Send + Sync>,
    pub verify: Arc<dyn VerifySessionUseCase + Send + Sync>,
    pub webhook: Arc<dyn HandleWebhookUseCase + Send + Sync>,
}
