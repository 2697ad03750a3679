use std::sync::Arc;

use crate::progress::application::ports::incoming::use_cases::{
    GetProgressUseCase, ToggleLessonUseCase,
};

#[derive(Clone)]
pub struct ProgressUseCases {
    pub get: Arc<dyn GetProgressUseCase + Send + Sync>,
    pub toggle_lesson: Arc<dyn ToggleLessonUseCase + Send + Sync>,
}
