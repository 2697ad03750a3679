use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;

pub const CERTIFICATE_PREFIX: &str = "CERT-";

/// Proof of completion. Never modified once issued.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Certificate {
    pub id: Uuid,
    pub certificate_id: String,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MyCertificate {
    #[serde(flatten)]
    pub certificate: Certificate,
    pub course_title: String,
    pub course_thumbnail: Option<String>,
}

/// `CERT-` followed by 8 uppercase hex characters.
pub fn generate_certificate_id() -> String {
    let mut bytes = [0u8; 4];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{}{}", CERTIFICATE_PREFIX, hex::encode_upper(bytes))
}
