mod get_progress_service;
mod toggle_lesson_service;

pub use get_progress_service::GetProgressService;
pub use toggle_lesson_service::ToggleLessonService;
