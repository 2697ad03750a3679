use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    course::application::domain::entities::CourseId,
    review::application::{
        domain::entities::{Review, MAX_RATING, MIN_RATING},
        ports::outgoing::NewReview,
    },
};

pub const MAX_COMMENT_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewCommandError {
    #[error("Rating must be between {MIN_RATING} and {MAX_RATING}")]
    InvalidRating,

    #[error("Comment must be at most {MAX_COMMENT_LEN} characters")]
    CommentTooLong,
}

#[derive(Debug, Clone)]
pub struct SubmitReviewCommand {
    data: NewReview,
}

impl SubmitReviewCommand {
    pub fn new(
        user_id: UserId,
        course_id: CourseId,
        rating: i32,
        comment: Option<String>,
    ) -> Result<Self, ReviewCommandError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReviewCommandError::InvalidRating);
        }

        let comment = comment.unwrap_or_default().trim().to_string();
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(ReviewCommandError::CommentTooLong);
        }

        Ok(Self {
            data: NewReview {
                user_id,
                course_id,
                rating,
                comment,
            },
        })
    }

    pub fn user_id(&self) -> UserId {
        self.data.user_id
    }

    pub fn course_id(&self) -> CourseId {
        self.data.course_id
    }

    pub fn into_data(self) -> NewReview {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitReviewError {
    #[error("Only enrolled students can review this course")]
    NotEnrolled,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitReviewUseCase: Send + Sync {
    async fn execute(&self, command: SubmitReviewCommand) -> Result<Review, SubmitReviewError>;
}
