use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::enrollment::application::domain::entities::{Enrollment, EnrollmentStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub course_id: Uuid,

    #[sea_orm(column_type = "Text", nullable)]
    pub payment_reference: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub enrolled_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_enrollment(&self) -> Result<Enrollment, String> {
        let status = EnrollmentStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown enrollment status '{}'", self.status))?;

        Ok(Enrollment {
            id: self.id,
            user_id: UserId::from(self.user_id),
            course_id: CourseId::from(self.course_id),
            payment_reference: self.payment_reference.clone(),
            status,
            enrolled_at: self.enrolled_at.with_timezone(&chrono::Utc),
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_model(user_id: Uuid, course_id: Uuid) -> Model {
    Model {
        id: Uuid::new_v4(),
        user_id,
        course_id,
        payment_reference: Some("cs_test_123".to_string()),
        status: "active".to_string(),
        enrolled_at: chrono::Utc::now().fixed_offset(),
    }
}
