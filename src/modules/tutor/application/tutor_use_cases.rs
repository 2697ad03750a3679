use std::sync::Arc;

use crate::tutor::application::ports::incoming::use_cases::AskTutorUseCase;

#[derive(Clone)]
pub struct TutorUseCases {
    pub ask: Arc<dyn AskTutorUseCase + Send + Sync>,
}
