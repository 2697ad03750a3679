use serde::Serialize;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;

pub const PAID: &str = "paid";

/// Hosted checkout page the client is redirected to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutSession {
    pub session_id: String,
    pub url: String,
}

/// Checkout session as reported by the payment provider.
///
/// `user_id` and `course_id` come from the metadata attached at creation
/// and are `None` when missing or malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSession {
    pub id: String,
    pub payment_status: String,
    pub user_id: Option<UserId>,
    pub course_id: Option<CourseId>,
}

impl PaymentSession {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PAID
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentEvent {
    CheckoutCompleted(PaymentSession),
    Ignored(String),
}
