use sea_orm::entity::prelude::*;
#[cfg(feature = "no_db_triggers")]
use sea_orm::Set;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::progress::application::domain::entities::Progress;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub course_id: Uuid,

    /// Array of lesson ids.
    #[sea_orm(column_type = "JsonBinary")]
    pub completed_lessons: Json,

    pub percent: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

pub fn lessons_to_json(lessons: &[Uuid]) -> Json {
    Json::Array(
        lessons
            .iter()
            .map(|id| Json::String(id.to_string()))
            .collect(),
    )
}

impl Model {
    pub fn to_progress(&self) -> Result<Progress, String> {
        let completed_lessons: Vec<Uuid> = serde_json::from_value(self.completed_lessons.clone())
            .map_err(|e| format!("malformed completed lessons for progress {}: {e}", self.id))?;

        Ok(Progress {
            user_id: UserId::from(self.user_id),
            course_id: CourseId::from(self.course_id),
            completed_lessons,
            percent: self.percent,
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_model(user_id: Uuid, course_id: Uuid, completed: &[Uuid], percent: i32) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        user_id,
        course_id,
        completed_lessons: lessons_to_json(completed),
        percent,
        created_at: now,
        updated_at: now,
    }
}
