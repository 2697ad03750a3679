use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::enrollment::application::{
    domain::entities::{EnrolledStudent, EnrollmentOverview, MyCourse},
    ports::{
        incoming::use_cases::{
            ListAllEnrollmentsError, ListAllEnrollmentsUseCase, ListInstructorStudentsError,
            ListInstructorStudentsUseCase, ListMyCoursesError, ListMyCoursesUseCase,
        },
        outgoing::EnrollmentQuery,
    },
};

pub struct ListMyCoursesService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListMyCoursesService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListMyCoursesUseCase for ListMyCoursesService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<MyCourse>, ListMyCoursesError> {
        self.query
            .list_for_user(user_id)
            .await
            .map_err(|e| ListMyCoursesError::QueryError(e.to_string()))
    }
}

pub struct ListInstructorStudentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListInstructorStudentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListInstructorStudentsUseCase for ListInstructorStudentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<EnrolledStudent>, ListInstructorStudentsError> {
        self.query
            .list_students_for_instructor(instructor_id)
            .await
            .map_err(|e| ListInstructorStudentsError::QueryError(e.to_string()))
    }
}

pub struct ListAllEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListAllEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAllEnrollmentsUseCase for ListAllEnrollmentsService<Q>
where
    Q: EnrollmentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EnrollmentOverview>, ListAllEnrollmentsError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListAllEnrollmentsError::QueryError(e.to_string()))
    }
}
