use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::progress::application::{
    domain::entities::Progress,
    ports::outgoing::{ProgressRepository, ProgressRepositoryError},
};

#[derive(Clone, Default)]
pub struct FakeProgressStore {
    records: Arc<Mutex<Vec<Progress>>>,
    fail: bool,
}

impl FakeProgressStore {
    pub fn with_progress(progress: Progress) -> Self {
        let store = Self::default();
        store.records.lock().unwrap().push(progress);
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<Progress> {
        self.records.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ProgressRepositoryError> {
        if self.fail {
            return Err(ProgressRepositoryError::DatabaseError("boom".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for FakeProgressStore {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Progress>, ProgressRepositoryError> {
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id && p.course_id == course_id)
            .cloned())
    }

    async fn save(&self, progress: Progress) -> Result<Progress, ProgressRepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        records.retain(|p| !(p.user_id == progress.user_id && p.course_id == progress.course_id));
        records.push(progress.clone());
        Ok(progress)
    }

    async fn toggle_lesson(
        &self,
        user_id: UserId,
        course_id: CourseId,
        lesson_id: Uuid,
        course_lessons: &HashSet<Uuid>,
    ) -> Result<(Progress, bool), ProgressRepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let pos = match records
            .iter()
            .position(|p| p.user_id == user_id && p.course_id == course_id)
        {
            Some(pos) => pos,
            None => {
                records.push(Progress::empty(user_id, course_id));
                records.len() - 1
            }
        };

        let progress = &mut records[pos];
        let completed = progress.toggle(lesson_id);
        progress.recompute(course_lessons);
        Ok((progress.clone(), completed))
    }
}
