mod list_reviews;
mod submit_review;

pub use list_reviews::{
    ListCourseReviewsError, ListCourseReviewsUseCase, ListInstructorReviewsError,
    ListInstructorReviewsUseCase,
};
pub use submit_review::{
    ReviewCommandError, SubmitReviewCommand, SubmitReviewError, SubmitReviewUseCase,
};
