use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    enrollment::application::domain::entities::MyCourse,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMyCoursesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListMyCoursesUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<MyCourse>, ListMyCoursesError>;
}
