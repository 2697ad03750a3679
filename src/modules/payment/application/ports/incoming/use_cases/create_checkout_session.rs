use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    payment::application::domain::entities::CheckoutSession,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCheckoutSessionError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("You are already enrolled in this course")]
    AlreadyEnrolled,

    #[error("This course is free")]
    CourseIsFree,

    #[error("Payment provider error: {0}")]
    GatewayError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCheckoutSessionUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<CheckoutSession, CreateCheckoutSessionError>;
}
