use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::{
        domain::entities::{Course, CourseStatus},
        ports::outgoing::NewCourse,
    },
};

use super::course_input::{
    optional_text, parse_level, parse_status, validate_category, validate_price,
    validate_sections, validate_title, CourseCommandError, SectionInput, MAX_DESCRIPTION_LEN,
    MAX_SUBTITLE_LEN,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseInput {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: i64,
    pub thumbnail: Option<String>,
    pub category: String,
    pub level: String,
    pub status: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionInput>,
}

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    data: NewCourse,
}

impl CreateCourseCommand {
    pub fn new(instructor_id: UserId, input: CreateCourseInput) -> Result<Self, CourseCommandError> {
        let status = match input.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => CourseStatus::Draft,
        };

        let data = NewCourse {
            title: validate_title(&input.title)?,
            subtitle: optional_text(input.subtitle, "subtitle", MAX_SUBTITLE_LEN)?,
            description: optional_text(input.description, "description", MAX_DESCRIPTION_LEN)?,
            price_cents: validate_price(input.price_cents)?,
            thumbnail: optional_text(input.thumbnail, "thumbnail", 2048)?,
            category: validate_category(&input.category)?,
            level: parse_level(&input.level)?,
            status,
            instructor_id,
            sections: validate_sections(input.sections)?,
        };

        Ok(Self { data })
    }

    pub fn instructor_id(&self) -> UserId {
        self.data.instructor_id
    }

    pub fn data(&self) -> &NewCourse {
        &self.data
    }

    pub fn into_data(self) -> NewCourse {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCourseError {
    #[error("Instructor account is not approved")]
    InstructorNotApproved,

    #[error("Category '{0}' does not exist")]
    CategoryNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError>;
}
