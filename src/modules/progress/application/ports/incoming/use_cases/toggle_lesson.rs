use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    progress::application::domain::entities::Progress,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleLessonCommand {
    user_id: UserId,
    course_id: CourseId,
    lesson_id: Uuid,
}

impl ToggleLessonCommand {
    pub fn new(user_id: UserId, course_id: CourseId, lesson_id: Uuid) -> Self {
        Self {
            user_id,
            course_id,
            lesson_id,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn lesson_id(&self) -> Uuid {
        self.lesson_id
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleLessonError {
    #[error("You are not enrolled in this course")]
    NotEnrolled,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Lesson does not belong to this course")]
    UnknownLesson,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ToggleLessonUseCase: Send + Sync {
    async fn execute(&self, command: ToggleLessonCommand) -> Result<Progress, ToggleLessonError>;
}
