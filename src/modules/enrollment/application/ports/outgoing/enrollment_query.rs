use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    enrollment::application::domain::entities::{
        EnrolledStudent, Enrollment, EnrollmentOverview, MyCourse,
    },
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrollmentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EnrollmentQuery: Send + Sync {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Enrollment>, EnrollmentQueryError>;

    async fn is_enrolled(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<bool, EnrollmentQueryError> {
        Ok(self.find(user_id, course_id).await?.is_some())
    }

    /// Newest enrollment first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<MyCourse>, EnrollmentQueryError>;

    async fn list_students_for_instructor(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<EnrolledStudent>, EnrollmentQueryError>;

    async fn list_all(&self) -> Result<Vec<EnrollmentOverview>, EnrollmentQueryError>;
}
