use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::{
        domain::entities::{Course, CourseId},
        ports::outgoing::CourseChanges,
    },
};

use super::course_input::{
    optional_text, parse_level, parse_status, validate_category, validate_price,
    validate_sections, validate_title, CourseCommandError, SectionInput, MAX_DESCRIPTION_LEN,
    MAX_SUBTITLE_LEN,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub status: Option<String>,
    pub sections: Option<Vec<SectionInput>>,
}

#[derive(Debug, Clone)]
pub struct UpdateCourseCommand {
    course_id: CourseId,
    instructor_id: UserId,
    changes: CourseChanges,
}

impl UpdateCourseCommand {
    pub fn new(
        course_id: CourseId,
        instructor_id: UserId,
        input: UpdateCourseInput,
    ) -> Result<Self, CourseCommandError> {
        let changes = CourseChanges {
            title: input.title.as_deref().map(validate_title).transpose()?,
            subtitle: input
                .subtitle
                .map(|s| optional_text(Some(s), "subtitle", MAX_SUBTITLE_LEN))
                .transpose()?,
            description: input
                .description
                .map(|d| optional_text(Some(d), "description", MAX_DESCRIPTION_LEN))
                .transpose()?,
            price_cents: input.price_cents.map(validate_price).transpose()?,
            thumbnail: input
                .thumbnail
                .map(|t| optional_text(Some(t), "thumbnail", 2048))
                .transpose()?,
            category: input.category.as_deref().map(validate_category).transpose()?,
            level: input.level.as_deref().map(parse_level).transpose()?,
            status: input.status.as_deref().map(parse_status).transpose()?,
            sections: input.sections.map(validate_sections).transpose()?,
        };

        if changes == CourseChanges::default() {
            return Err(CourseCommandError::NothingToUpdate);
        }

        Ok(Self {
            course_id,
            instructor_id,
            changes,
        })
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn instructor_id(&self) -> UserId {
        self.instructor_id
    }

    pub fn changes(&self) -> &CourseChanges {
        &self.changes
    }

    pub fn into_changes(self) -> CourseChanges {
        self.changes
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCourseError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Category '{0}' does not exist")]
    CategoryNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCourseUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCourseCommand) -> Result<Course, UpdateCourseError>;
}
