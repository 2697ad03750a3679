//! Validation shared by course creation and updates.

use serde::Deserialize;
use std::collections::HashSet;
use uuid::Uuid;

use crate::course::application::domain::entities::{
    CourseLevel, CourseStatus, Lesson, LessonType, QuizQuestion, Section,
};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_SUBTITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 10_000;
pub const MAX_LESSON_TITLE_LEN: usize = 200;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestionInput {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LessonInput {
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(rename = "type")]
    pub lesson_type: String,
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub duration: Option<u32>,
    pub is_preview: Option<bool>,
    pub questions: Option<Vec<QuizQuestionInput>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionInput {
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<LessonInput>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CourseCommandError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Title must be at most {MAX_TITLE_LEN} characters")]
    TitleTooLong,

    #[error("Field '{0}' is too long")]
    FieldTooLong(&'static str),

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Unknown level '{0}'")]
    InvalidLevel(String),

    #[error("Unknown status '{0}'")]
    InvalidStatus(String),

    #[error("Category is required")]
    EmptyCategory,

    #[error("Section {0} needs a title")]
    EmptySectionTitle(usize),

    #[error("Lesson {lesson} in section {section} needs a title")]
    EmptyLessonTitle { section: usize, lesson: usize },

    #[error("Unknown lesson type '{0}'")]
    InvalidLessonType(String),

    #[error("Quiz question in lesson '{0}' is invalid")]
    InvalidQuizQuestion(String),

    #[error("Lesson id {0} is used more than once")]
    DuplicateLessonId(Uuid),

    #[error("No fields to update")]
    NothingToUpdate,
}

pub fn validate_title(raw: &str) -> Result<String, CourseCommandError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CourseCommandError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CourseCommandError::TitleTooLong);
    }
    Ok(title.to_string())
}

pub fn validate_price(price_cents: i64) -> Result<i64, CourseCommandError> {
    if price_cents < 0 {
        return Err(CourseCommandError::NegativePrice);
    }
    Ok(price_cents)
}

pub fn validate_category(raw: &str) -> Result<String, CourseCommandError> {
    let category = raw.trim();
    if category.is_empty() {
        return Err(CourseCommandError::EmptyCategory);
    }
    Ok(category.to_string())
}

pub fn parse_level(raw: &str) -> Result<CourseLevel, CourseCommandError> {
    CourseLevel::parse(raw).ok_or_else(|| CourseCommandError::InvalidLevel(raw.to_string()))
}

pub fn parse_status(raw: &str) -> Result<CourseStatus, CourseCommandError> {
    CourseStatus::parse(raw).ok_or_else(|| CourseCommandError::InvalidStatus(raw.to_string()))
}

/// Blank text becomes `None`.
pub fn optional_text(
    value: Option<String>,
    field: &'static str,
    max_len: usize,
) -> Result<Option<String>, CourseCommandError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) if text.chars().count() > max_len => Err(CourseCommandError::FieldTooLong(field)),
        Some(text) => Ok(Some(text.to_string())),
    }
}

fn validate_question(
    lesson_title: &str,
    input: QuizQuestionInput,
) -> Result<QuizQuestion, CourseCommandError> {
    let invalid = || CourseCommandError::InvalidQuizQuestion(lesson_title.to_string());

    let question = input.question.trim().to_string();
    let options: Vec<String> = input
        .options
        .into_iter()
        .map(|o| o.trim().to_string())
        .collect();

    if question.is_empty() || options.len() < 2 || options.iter().any(String::is_empty) {
        return Err(invalid());
    }
    if input.correct_answer >= options.len() {
        return Err(invalid());
    }

    Ok(QuizQuestion {
        question,
        options,
        correct_answer: input.correct_answer,
    })
}

/// Validates the curriculum and assigns ids to new lessons.
pub fn validate_sections(inputs: Vec<SectionInput>) -> Result<Vec<Section>, CourseCommandError> {
    let mut seen_ids = HashSet::new();
    let mut sections = Vec::with_capacity(inputs.len());

    for (section_idx, section) in inputs.into_iter().enumerate() {
        let title = section.title.trim().to_string();
        if title.is_empty() {
            return Err(CourseCommandError::EmptySectionTitle(section_idx + 1));
        }

        let mut lessons = Vec::with_capacity(section.lessons.len());
        for (lesson_idx, lesson) in section.lessons.into_iter().enumerate() {
            let lesson_title = lesson.title.trim().to_string();
            if lesson_title.is_empty() {
                return Err(CourseCommandError::EmptyLessonTitle {
                    section: section_idx + 1,
                    lesson: lesson_idx + 1,
                });
            }
            if lesson_title.chars().count() > MAX_LESSON_TITLE_LEN {
                return Err(CourseCommandError::FieldTooLong("lesson title"));
            }

            let lesson_type = LessonType::parse(&lesson.lesson_type)
                .ok_or_else(|| CourseCommandError::InvalidLessonType(lesson.lesson_type.clone()))?;

            let id = lesson.id.unwrap_or_else(Uuid::new_v4);
            if !seen_ids.insert(id) {
                return Err(CourseCommandError::DuplicateLessonId(id));
            }

            let questions = match lesson_type {
                LessonType::Quiz => lesson
                    .questions
                    .unwrap_or_default()
                    .into_iter()
                    .map(|q| validate_question(&lesson_title, q))
                    .collect::<Result<Vec<_>, _>>()?,
                _ => Vec::new(),
            };

            lessons.push(Lesson {
                id,
                title: lesson_title,
                lesson_type,
                content: lesson.content.filter(|c| !c.trim().is_empty()),
                video_url: lesson
                    .video_url
                    .map(|u| u.trim().to_string())
                    .filter(|u| !u.is_empty()),
                duration: lesson.duration.unwrap_or(0),
                is_preview: lesson.is_preview.unwrap_or(false),
                questions,
            });
        }

        sections.push(Section { title, lessons });
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(title: &str, lesson_type: &str) -> LessonInput {
        LessonInput {
            id: None,
            title: title.to_string(),
            lesson_type: lesson_type.to_string(),
            content: None,
            video_url: Some(" https://cdn.example.com/v.mp4 ".to_string()),
            duration: Some(12),
            is_preview: None,
            questions: None,
        }
    }

    fn quiz(correct_answer: usize) -> LessonInput {
        LessonInput {
            questions: Some(vec![QuizQuestionInput {
                question: "2 + 2?".to_string(),
                options: vec!["3".to_string(), "4".to_string()],
                correct_answer,
            }]),
            ..lesson("Quiz", "quiz")
        }
    }

    #[test]
    fn assigns_ids_and_normalizes_lessons() {
        let sections = validate_sections(vec![SectionInput {
            title: " Intro ".to_string(),
            lessons: vec![lesson("Welcome", "Video"), quiz(1)],
        }])
        .unwrap();

        assert_eq!(sections[0].title, "Intro");
        let lessons = &sections[0].lessons;
        assert_ne!(lessons[0].id, lessons[1].id);
        assert_eq!(lessons[0].lesson_type, LessonType::Video);
        assert_eq!(lessons[0].video_url.as_deref(), Some("https://cdn.example.com/v.mp4"));
        assert_eq!(lessons[1].questions.len(), 1);
    }

    #[test]
    fn keeps_existing_lesson_ids() {
        let id = Uuid::new_v4();
        let sections = validate_sections(vec![SectionInput {
            title: "Intro".to_string(),
            lessons: vec![LessonInput {
                id: Some(id),
                ..lesson("Welcome", "text")
            }],
        }])
        .unwrap();

        assert_eq!(sections[0].lessons[0].id, id);
    }

    #[test]
    fn rejects_answer_outside_options() {
        let err = validate_sections(vec![SectionInput {
            title: "Intro".to_string(),
            lessons: vec![quiz(2)],
        }])
        .unwrap_err();

        assert_eq!(err, CourseCommandError::InvalidQuizQuestion("Quiz".to_string()));
    }

    #[test]
    fn rejects_blank_titles_and_unknown_types() {
        let err = validate_sections(vec![SectionInput {
            title: " ".to_string(),
            lessons: vec![],
        }])
        .unwrap_err();
        assert_eq!(err, CourseCommandError::EmptySectionTitle(1));

        let err = validate_sections(vec![SectionInput {
            title: "Intro".to_string(),
            lessons: vec![lesson("Welcome", "podcast")],
        }])
        .unwrap_err();
        assert_eq!(err, CourseCommandError::InvalidLessonType("podcast".to_string()));

        let err = validate_sections(vec![SectionInput {
            title: "Intro".to_string(),
            lessons: vec![lesson("ok", "text"), lesson("  ", "text")],
        }])
        .unwrap_err();
        assert_eq!(err, CourseCommandError::EmptyLessonTitle { section: 1, lesson: 2 });
    }

    #[test]
    fn rejects_duplicate_lesson_ids() {
        let id = Uuid::new_v4();
        let err = validate_sections(vec![SectionInput {
            title: "Intro".to_string(),
            lessons: vec![
                LessonInput { id: Some(id), ..lesson("A", "text") },
                LessonInput { id: Some(id), ..lesson("B", "text") },
            ],
        }])
        .unwrap_err();

        assert_eq!(err, CourseCommandError::DuplicateLessonId(id));
    }

    #[test]
    fn scalar_validators() {
        assert_eq!(validate_title(&"x".repeat(101)), Err(CourseCommandError::TitleTooLong));
        assert_eq!(validate_price(-1), Err(CourseCommandError::NegativePrice));
        assert_eq!(parse_level("Intermediate"), Ok(CourseLevel::Intermediate));
        assert_eq!(optional_text(Some("  ".into()), "subtitle", 10), Ok(None));
    }
}
