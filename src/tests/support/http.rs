use actix_web::{body::MessageBody, dev::ServiceResponse, test, web};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::tests::support::auth_fakes::StubTokenProvider;

pub type TokenData = web::Data<Arc<dyn TokenProvider + Send + Sync>>;

pub fn token_data(provider: StubTokenProvider) -> TokenData {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

/// Any bearer token works with `StubTokenProvider`.
pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> serde_json::Value {
    test::read_body_json(resp).await
}
