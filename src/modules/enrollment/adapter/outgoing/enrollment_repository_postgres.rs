use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::enrollment::application::{
    domain::entities::{Enrollment, EnrollmentStatus},
    ports::outgoing::{EnrollmentRepository, EnrollmentRepositoryError, NewEnrollment},
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::enrollments::ActiveModel as EnrollmentActiveModel;

#[derive(Clone, Debug)]
pub struct EnrollmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EnrollmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EnrollmentRepositoryError {
    if is_unique_violation(&e) {
        return EnrollmentRepositoryError::AlreadyEnrolled;
    }
    EnrollmentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryPostgres {
    async fn create(&self, data: NewEnrollment) -> Result<Enrollment, EnrollmentRepositoryError> {
        let active = EnrollmentActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.value()),
            course_id: Set(data.course_id.value()),
            payment_reference: Set(data.payment_reference),
            status: Set(EnrollmentStatus::Active.as_str().to_string()),
            enrolled_at: Set(chrono::Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        inserted
            .to_enrollment()
            .map_err(EnrollmentRepositoryError::DatabaseError)
    }
}
