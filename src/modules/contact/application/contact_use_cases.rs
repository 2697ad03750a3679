use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::{
    ListContactsUseCase, ReplyContactUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactsUseCase + Send + Sync>,
    pub reply: Arc<dyn ReplyContactUseCase + Send + Sync>,
}
