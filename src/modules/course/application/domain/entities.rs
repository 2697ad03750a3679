use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(Uuid);

impl CourseId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CourseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(CourseLevel::Beginner),
            "intermediate" => Some(CourseLevel::Intermediate),
            "advanced" => Some(CourseLevel::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    Draft,
    Published,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Draft => "Draft",
            CourseStatus::Published => "Published",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(CourseStatus::Draft),
            "published" => Some(CourseStatus::Published),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Video,
    Quiz,
    Text,
}

impl LessonType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "video" => Some(LessonType::Video),
            "quiz" => Some(LessonType::Quiz),
            "text" => Some(LessonType::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub is_preview: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<QuizQuestion>,
}

impl Lesson {
    fn strip_locked_content(&mut self) {
        if !self.is_preview {
            self.content = None;
            self.video_url = None;
            self.questions.clear();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub thumbnail: Option<String>,
    pub category: String,
    pub level: CourseLevel,
    pub status: CourseStatus,
    pub instructor_id: UserId,
    pub sections: Vec<Section>,
    pub rating: f64,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn is_published(&self) -> bool {
        self.status == CourseStatus::Published
    }

    pub fn is_free(&self) -> bool {
        self.price_cents == 0
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.instructor_id == user_id
    }

    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.sections.iter().flat_map(|s| s.lessons.iter())
    }

    pub fn total_lessons(&self) -> usize {
        self.lessons().count()
    }

    pub fn total_duration(&self) -> u32 {
        total_duration(&self.sections)
    }

    pub fn has_lesson(&self, lesson_id: Uuid) -> bool {
        self.lessons().any(|l| l.id == lesson_id)
    }

    pub fn lesson_ids(&self) -> HashSet<Uuid> {
        self.lessons().map(|l| l.id).collect()
    }

    /// Removes content, video URL and quiz questions from every non-preview lesson.
    pub fn strip_locked_content(&mut self) {
        for section in &mut self.sections {
            for lesson in &mut section.lessons {
                lesson.strip_locked_content();
            }
        }
    }
}

pub fn total_duration(sections: &[Section]) -> u32 {
    sections
        .iter()
        .flat_map(|s| s.lessons.iter())
        .map(|l| l.duration)
        .sum()
}

/// Listing view of a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseCard {
    pub id: CourseId,
    pub title: String,
    pub subtitle: Option<String>,
    pub thumbnail: Option<String>,
    pub price_cents: i64,
    pub category: String,
    pub level: CourseLevel,
    pub status: CourseStatus,
    pub rating: f64,
    pub rating_count: i32,
    pub instructor_id: UserId,
    pub instructor_name: String,
    pub enrolled_students: u64,
    pub total_duration: u32,
    pub created_at: DateTime<Utc>,
}

impl CourseCard {
    pub fn new(course: &Course, instructor_name: String, enrolled_students: u64) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            subtitle: course.subtitle.clone(),
            thumbnail: course.thumbnail.clone(),
            price_cents: course.price_cents,
            category: course.category.clone(),
            level: course.level,
            status: course.status,
            rating: course.rating,
            rating_count: course.rating_count,
            instructor_id: course.instructor_id,
            instructor_name,
            enrolled_students,
            total_duration: course.total_duration(),
            created_at: course.created_at,
        }
    }
}

/// A course with the instructor name and enrollment count resolved.
#[derive(Debug, Clone)]
pub struct CourseRecord {
    pub course: Course,
    pub instructor_name: String,
    pub enrolled_students: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseDetails {
    #[serde(flatten)]
    pub course: Course,
    pub instructor_name: String,
    pub enrolled_students: u64,
    pub total_duration: u32,
    pub is_enrolled: bool,
}

/// Who is acting on a course. Admins may act on any course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAccess {
    Owner(UserId),
    Admin,
}

impl CourseAccess {
    pub fn permits(&self, course: &Course) -> bool {
        match self {
            CourseAccess::Owner(user_id) => course.is_owned_by(*user_id),
            CourseAccess::Admin => true,
        }
    }
}
