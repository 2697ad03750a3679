mod list_reviews_service;
mod submit_review_service;

pub use list_reviews_service::{ListCourseReviewsService, ListInstructorReviewsService};
pub use submit_review_service::SubmitReviewService;
