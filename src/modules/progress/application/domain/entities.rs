use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;

/// Completion state of one student in one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub completed_lessons: Vec<Uuid>,
    pub percent: i32,
    pub updated_at: DateTime<Utc>,
}

impl Progress {
    pub fn empty(user_id: UserId, course_id: CourseId) -> Self {
        Self {
            user_id,
            course_id,
            completed_lessons: Vec::new(),
            percent: 0,
            updated_at: Utc::now(),
        }
    }

    /// Adds the lesson when absent, removes it when present. Returns whether it is now completed.
    pub fn toggle(&mut self, lesson_id: Uuid) -> bool {
        if let Some(pos) = self.completed_lessons.iter().position(|id| *id == lesson_id) {
            self.completed_lessons.remove(pos);
            false
        } else {
            self.completed_lessons.push(lesson_id);
            true
        }
    }

    pub fn recompute(&mut self, course_lessons: &HashSet<Uuid>) {
        self.percent = compute_percent(&self.completed_lessons, course_lessons);
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }
}

/// Ids no longer in the course are ignored.
pub fn compute_percent(completed: &[Uuid], course_lessons: &HashSet<Uuid>) -> i32 {
    if course_lessons.is_empty() {
        return 0;
    }
    let done = completed
        .iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|id| course_lessons.contains(id))
        .count();

    ((done as f64 / course_lessons.len() as f64) * 100.0).round() as i32
}
