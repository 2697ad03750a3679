use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::enrollment::application::{
    domain::entities::{
        EnrolledStudent, Enrollment, EnrollmentOverview, EnrollmentStatus, MyCourse,
    },
    ports::outgoing::{
        EnrollmentQuery, EnrollmentQueryError, EnrollmentRepository, EnrollmentRepositoryError,
        NewEnrollment,
    },
};

pub fn sample_enrollment(user_id: UserId, course_id: CourseId) -> Enrollment {
    Enrollment {
        id: Uuid::new_v4(),
        user_id,
        course_id,
        payment_reference: None,
        status: EnrollmentStatus::Active,
        enrolled_at: Utc::now(),
    }
}

/// In-memory enrollments table.
///
/// `racing()` makes `create` report a unique violation after storing the
/// row, which is what a concurrent duplicate insert looks like.
#[derive(Clone, Default)]
pub struct FakeEnrollmentStore {
    enrollments: Arc<Mutex<Vec<Enrollment>>>,
    inserts: Arc<Mutex<usize>>,
    fail: bool,
    racing: bool,
}

impl FakeEnrollmentStore {
    pub fn with_enrollment(user_id: UserId, course_id: CourseId) -> Self {
        let store = Self::default();
        store
            .enrollments
            .lock()
            .unwrap()
            .push(sample_enrollment(user_id, course_id));
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn racing(user_id: UserId, course_id: CourseId) -> Self {
        Self {
            racing: true,
            ..Self::with_enrollment(user_id, course_id)
        }
    }

    pub fn enrollments(&self) -> Vec<Enrollment> {
        self.enrollments.lock().unwrap().clone()
    }

    pub fn insert_attempts(&self) -> usize {
        *self.inserts.lock().unwrap()
    }

    fn check(&self) -> Result<(), EnrollmentQueryError> {
        if self.fail {
            return Err(EnrollmentQueryError::DatabaseError("boom".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EnrollmentQuery for FakeEnrollmentStore {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Enrollment>, EnrollmentQueryError> {
        self.check()?;
        Ok(self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .cloned())
    }

    async fn list_for_user(&self, _user_id: UserId) -> Result<Vec<MyCourse>, EnrollmentQueryError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn list_students_for_instructor(
        &self,
        _instructor_id: UserId,
    ) -> Result<Vec<EnrolledStudent>, EnrollmentQueryError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn list_all(&self) -> Result<Vec<EnrollmentOverview>, EnrollmentQueryError> {
        self.check()?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl EnrollmentRepository for FakeEnrollmentStore {
    async fn create(&self, data: NewEnrollment) -> Result<Enrollment, EnrollmentRepositoryError> {
        *self.inserts.lock().unwrap() += 1;
        if self.fail {
            return Err(EnrollmentRepositoryError::DatabaseError("boom".to_string()));
        }
        if self.racing {
            return Err(EnrollmentRepositoryError::AlreadyEnrolled);
        }

        let mut enrollments = self.enrollments.lock().unwrap();
        if enrollments
            .iter()
            .any(|e| e.user_id == data.user_id && e.course_id == data.course_id)
        {
            return Err(EnrollmentRepositoryError::AlreadyEnrolled);
        }

        let enrollment = Enrollment {
            payment_reference: data.payment_reference,
            ..sample_enrollment(data.user_id, data.course_id)
        };
        enrollments.push(enrollment.clone());
        Ok(enrollment)
    }
}
