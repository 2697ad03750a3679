use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::course::application::{
    domain::entities::Course,
    ports::{
        incoming::use_cases::{CreateCourseCommand, CreateCourseError, CreateCourseUseCase},
        outgoing::CourseRepository,
    },
};

pub struct CreateCourseService<R, U, C>
where
    R: CourseRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    repository: R,
    users: U,
    categories: C,
}

impl<R, U, C> CreateCourseService<R, U, C>
where
    R: CourseRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    pub fn new(repository: R, users: U, categories: C) -> Self {
        Self {
            repository,
            users,
            categories,
        }
    }
}

#[async_trait]
impl<R, U, C> CreateCourseUseCase for CreateCourseService<R, U, C>
where
    R: CourseRepository + Send + Sync,
    U: UserQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        // 1. Only approved instructors may create courses
        let instructor = self
            .users
            .find_by_id(command.instructor_id())
            .await
            .map_err(|e| CreateCourseError::RepositoryError(e.to_string()))?;

        if !instructor.is_some_and(|p| p.is_approved_instructor()) {
            return Err(CreateCourseError::InstructorNotApproved);
        }

        // 2. Category must exist
        let category = &command.data().category;
        let exists = self
            .categories
            .exists_by_name(category)
            .await
            .map_err(|e| CreateCourseError::RepositoryError(e.to_string()))?;
        if !exists {
            return Err(CreateCourseError::CategoryNotFound(category.clone()));
        }

        // 3. Persist
        let course = self
            .repository
            .create(command.into_data())
            .await
            .map_err(|e| CreateCourseError::RepositoryError(e.to_string()))?;

        tracing::info!(
            course_id = %course.id,
            instructor_id = %course.instructor_id,
            "Course created"
        );
        Ok(course)
    }
}
