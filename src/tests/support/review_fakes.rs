use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::review::application::{
    domain::entities::{CourseReview, InstructorReview, RatingSummary, Review},
    ports::outgoing::{
        NewReview, ReviewQuery, ReviewQueryError, ReviewRepository, ReviewRepositoryError,
    },
};

pub fn sample_review(user_id: UserId, course_id: CourseId, rating: i32) -> Review {
    let now = Utc::now();
    Review {
        id: Uuid::new_v4(),
        user_id,
        course_id,
        rating,
        comment: "Clear and practical".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// In-memory reviews table; one review per (user, course).
#[derive(Clone, Default)]
pub struct FakeReviewStore {
    reviews: Arc<Mutex<Vec<Review>>>,
    fail: bool,
}

impl FakeReviewStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, review: Review) {
        self.reviews.lock().unwrap().push(review);
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewRepository for FakeReviewStore {
    async fn upsert(
        &self,
        data: NewReview,
    ) -> Result<(Review, RatingSummary), ReviewRepositoryError> {
        if self.fail {
            return Err(ReviewRepositoryError::DatabaseError("boom".to_string()));
        }
        let mut reviews = self.reviews.lock().unwrap();
        let review = match reviews
            .iter_mut()
            .find(|r| r.user_id == data.user_id && r.course_id == data.course_id)
        {
            Some(existing) => {
                existing.rating = data.rating;
                existing.comment = data.comment;
                existing.updated_at = Utc::now();
                existing.clone()
            }
            None => {
                let review = Review {
                    comment: data.comment,
                    ..sample_review(data.user_id, data.course_id, data.rating)
                };
                reviews.push(review.clone());
                review
            }
        };

        let ratings: Vec<i32> = reviews
            .iter()
            .filter(|r| r.course_id == data.course_id)
            .map(|r| r.rating)
            .collect();
        let average = ratings.iter().sum::<i32>() as f64 / ratings.len() as f64;

        Ok((review, RatingSummary::from_average(average, ratings.len() as i64)))
    }
}

#[async_trait]
impl ReviewQuery for FakeReviewStore {
    async fn list_for_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<CourseReview>, ReviewQueryError> {
        if self.fail {
            return Err(ReviewQueryError::DatabaseError("boom".to_string()));
        }
        Ok(self
            .reviews()
            .into_iter()
            .rev()
            .filter(|r| r.course_id == course_id)
            .map(|review| CourseReview {
                review,
                reviewer_name: "Reviewer".to_string(),
            })
            .collect())
    }

    async fn list_for_instructor(
        &self,
        _instructor_id: UserId,
    ) -> Result<Vec<InstructorReview>, ReviewQueryError> {
        if self.fail {
            return Err(ReviewQueryError::DatabaseError("boom".to_string()));
        }
        Ok(Vec::new())
    }
}
