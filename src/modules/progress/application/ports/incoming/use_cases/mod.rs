mod get_progress;
mod toggle_lesson;

pub use get_progress::{GetProgressError, GetProgressUseCase};
pub use toggle_lesson::{ToggleLessonCommand, ToggleLessonError, ToggleLessonUseCase};
