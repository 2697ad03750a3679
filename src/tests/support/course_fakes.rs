use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::{
    domain::entities::{
        Course, CourseCard, CourseId, CourseLevel, CourseRecord, CourseStatus, Lesson, LessonType,
        QuizQuestion, Section,
    },
    ports::outgoing::{
        CourseChanges, CourseFilter, CourseQuery, CourseQueryError, CourseRepository,
        CourseRepositoryError, NewCourse,
    },
};
use crate::shared::pagination::{PageRequest, PageResult};

fn lesson(title: &str, lesson_type: LessonType, duration: u32, is_preview: bool) -> Lesson {
    Lesson {
        id: Uuid::new_v4(),
        title: title.to_string(),
        lesson_type,
        content: Some(format!("{title} notes")),
        video_url: Some(format!("https://cdn.example.com/{}.mp4", Uuid::new_v4())),
        duration,
        is_preview,
        questions: Vec::new(),
    }
}

/// A free, published course with two sections: a preview video, a locked
/// video and a locked quiz (10 + 25 + 5 minutes).
pub fn sample_course(instructor_id: UserId) -> Course {
    let mut quiz = lesson("Checkpoint quiz", LessonType::Quiz, 5, false);
    quiz.video_url = None;
    quiz.questions = vec![QuizQuestion {
        question: "What does `cargo build` do?".to_string(),
        options: vec!["Runs tests".to_string(), "Compiles".to_string()],
        correct_answer: 1,
    }];

    let now = Utc::now();
    Course {
        id: CourseId::from(Uuid::new_v4()),
        title: "Rust for Beginners".to_string(),
        subtitle: Some("Ownership without tears".to_string()),
        description: Some("A gentle course".to_string()),
        price_cents: 0,
        thumbnail: None,
        category: "Programming".to_string(),
        level: CourseLevel::Beginner,
        status: CourseStatus::Published,
        instructor_id,
        sections: vec![
            Section {
                title: "Getting started".to_string(),
                lessons: vec![
                    lesson("Welcome", LessonType::Video, 10, true),
                    lesson("Ownership", LessonType::Video, 25, false),
                ],
            },
            Section {
                title: "Practice".to_string(),
                lessons: vec![quiz],
            },
        ],
        rating: 0.0,
        rating_count: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn paid_course(instructor_id: UserId, price_cents: i64) -> Course {
    Course {
        price_cents,
        ..sample_course(instructor_id)
    }
}

pub fn sample_card(course: &Course) -> CourseCard {
    CourseCard::new(course, "Test Instructor".to_string(), 0)
}

/// In-memory course table serving both the repository and query ports.
#[derive(Clone, Default)]
pub struct FakeCourseStore {
    courses: Arc<Mutex<Vec<Course>>>,
    created: Arc<Mutex<Vec<NewCourse>>>,
    fail: bool,
}

impl FakeCourseStore {
    pub fn with_course(course: Course) -> Self {
        let store = Self::default();
        store.courses.lock().unwrap().push(course);
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, course: Course) {
        self.courses.lock().unwrap().push(course);
    }

    pub fn courses(&self) -> Vec<Course> {
        self.courses.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewCourse> {
        self.created.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), CourseQueryError> {
        if self.fail {
            return Err(CourseQueryError::DatabaseError("boom".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CourseQuery for FakeCourseStore {
    async fn find_by_id(&self, course_id: CourseId) -> Result<Option<Course>, CourseQueryError> {
        self.check()?;
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == course_id)
            .cloned())
    }

    async fn find_record(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseRecord>, CourseQueryError> {
        Ok(self.find_by_id(course_id).await?.map(|course| CourseRecord {
            course,
            instructor_name: "Test Instructor".to_string(),
            enrolled_students: 0,
        }))
    }

    async fn list_published(
        &self,
        filter: CourseFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseCard>, CourseQueryError> {
        self.check()?;
        let matching: Vec<CourseCard> = self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_published())
            .filter(|c| {
                filter.search.as_deref().is_none_or(|s| {
                    c.title.to_lowercase().contains(&s.to_lowercase())
                })
            })
            .filter(|c| filter.category.as_deref().is_none_or(|cat| c.category == cat))
            .filter(|c| filter.level.is_none_or(|l| c.level == l))
            .map(sample_card)
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn list_by_instructor(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<CourseCard>, CourseQueryError> {
        self.check()?;
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_owned_by(instructor_id))
            .map(sample_card)
            .collect())
    }

    async fn list_all(
        &self,
        status: Option<CourseStatus>,
    ) -> Result<Vec<CourseCard>, CourseQueryError> {
        self.check()?;
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| status.is_none_or(|s| c.status == s))
            .map(sample_card)
            .collect())
    }
}

#[async_trait]
impl CourseRepository for FakeCourseStore {
    async fn create(&self, data: NewCourse) -> Result<Course, CourseRepositoryError> {
        if self.fail {
            return Err(CourseRepositoryError::DatabaseError("boom".to_string()));
        }
        self.created.lock().unwrap().push(data.clone());

        let now = Utc::now();
        let course = Course {
            id: CourseId::from(Uuid::new_v4()),
            title: data.title,
            subtitle: data.subtitle,
            description: data.description,
            price_cents: data.price_cents,
            thumbnail: data.thumbnail,
            category: data.category,
            level: data.level,
            status: data.status,
            instructor_id: data.instructor_id,
            sections: data.sections,
            rating: 0.0,
            rating_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.courses.lock().unwrap().push(course.clone());
        Ok(course)
    }

    async fn update(
        &self,
        course_id: CourseId,
        changes: CourseChanges,
    ) -> Result<Course, CourseRepositoryError> {
        let mut courses = self.courses.lock().unwrap();
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or(CourseRepositoryError::NotFound)?;

        if let Some(title) = changes.title {
            course.title = title;
        }
        if let Some(subtitle) = changes.subtitle {
            course.subtitle = subtitle;
        }
        if let Some(description) = changes.description {
            course.description = description;
        }
        if let Some(price) = changes.price_cents {
            course.price_cents = price;
        }
        if let Some(thumbnail) = changes.thumbnail {
            course.thumbnail = thumbnail;
        }
        if let Some(category) = changes.category {
            course.category = category;
        }
        if let Some(level) = changes.level {
            course.level = level;
        }
        if let Some(status) = changes.status {
            course.status = status;
        }
        if let Some(sections) = changes.sections {
            course.sections = sections;
        }
        course.updated_at = Utc::now();
        Ok(course.clone())
    }

    async fn delete(&self, course_id: CourseId) -> Result<(), CourseRepositoryError> {
        let mut courses = self.courses.lock().unwrap();
        let before = courses.len();
        courses.retain(|c| c.id != course_id);
        if courses.len() == before {
            return Err(CourseRepositoryError::NotFound);
        }
        Ok(())
    }
}
