use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::{domain::entities::CourseId, ports::outgoing::CourseQuery};
use crate::enrollment::application::ports::outgoing::EnrollmentQuery;
use crate::payment::application::{
    domain::entities::CheckoutSession,
    ports::{
        incoming::use_cases::{CreateCheckoutSessionError, CreateCheckoutSessionUseCase},
        outgoing::{NewCheckout, PaymentGateway},
    },
};

pub struct CreateCheckoutSessionService<C, E, G>
where
    C: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    G: PaymentGateway + Send + Sync,
{
    courses: C,
    enrollments: E,
    gateway: G,
}

impl<C, E, G> CreateCheckoutSessionService<C, E, G>
where
    C: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    G: PaymentGateway + Send + Sync,
{
    pub fn new(courses: C, enrollments: E, gateway: G) -> Self {
        Self {
            courses,
            enrollments,
            gateway,
        }
    }
}

#[async_trait]
impl<C, E, G> CreateCheckoutSessionUseCase for CreateCheckoutSessionService<C, E, G>
where
    C: CourseQuery + Send + Sync,
    E: EnrollmentQuery + Send + Sync,
    G: PaymentGateway + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<CheckoutSession, CreateCheckoutSessionError> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await
            .map_err(|e| CreateCheckoutSessionError::RepositoryError(e.to_string()))?
            .filter(|c| c.is_published())
            .ok_or(CreateCheckoutSessionError::CourseNotFound)?;

        let enrolled = self
            .enrollments
            .is_enrolled(user_id, course_id)
            .await
            .map_err(|e| CreateCheckoutSessionError::RepositoryError(e.to_string()))?;
        if enrolled {
            return Err(CreateCheckoutSessionError::AlreadyEnrolled);
        }

        if course.is_free() {
            return Err(CreateCheckoutSessionError::CourseIsFree);
        }

        let description = course
            .subtitle
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| course.title.clone());

        let session = self
            .gateway
            .create_checkout_session(NewCheckout {
                user_id,
                course_id,
                product_name: course.title.clone(),
                description,
                unit_amount_cents: course.price_cents,
            })
            .await
            .map_err(|e| CreateCheckoutSessionError::GatewayError(e.to_string()))?;

        tracing::info!(
            user_id = %user_id,
            course_id = %course_id,
            session_id = %session.session_id,
            "Checkout session created"
        );

        Ok(session)
    }
}
