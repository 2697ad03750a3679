use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::certificate::application::domain::entities::Certificate;
use crate::course::application::domain::entities::CourseId;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", unique)]
    pub certificate_id: String,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub course_id: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub issued_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Certificate {
    fn from(model: Model) -> Self {
        Certificate {
            id: model.id,
            certificate_id: model.certificate_id,
            user_id: UserId::from(model.user_id),
            course_id: CourseId::from(model.course_id),
            issued_at: model.issued_at.with_timezone(&chrono::Utc),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(user_id: Uuid, course_id: Uuid) -> Model {
    Model {
        id: Uuid::new_v4(),
        certificate_id: "CERT-DEADBEEF".to_string(),
        user_id,
        course_id,
        issued_at: chrono::Utc::now().fixed_offset(),
    }
}
