use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::{
    Course, CourseId, CourseLevel, CourseStatus, Section,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub subtitle: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub price_cents: i64,

    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    #[sea_orm(column_type = "Text")]
    pub level: String,

    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "Uuid")]
    pub instructor_id: Uuid,

    /// Ordered sections with their lessons.
    #[sea_orm(column_type = "JsonBinary")]
    pub sections: Json,

    #[sea_orm(column_type = "Double")]
    pub rating: f64,

    pub rating_count: i32,

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

pub fn sections_to_json(sections: &[Section]) -> Result<Json, DbErr> {
    serde_json::to_value(sections).map_err(|e| DbErr::Json(e.to_string()))
}

impl Model {
    pub fn to_course(&self) -> Result<Course, String> {
        let level = CourseLevel::parse(&self.level)
            .ok_or_else(|| format!("unknown course level '{}'", self.level))?;
        let status = CourseStatus::parse(&self.status)
            .ok_or_else(|| format!("unknown course status '{}'", self.status))?;
        let sections: Vec<Section> = serde_json::from_value(self.sections.clone())
            .map_err(|e| format!("malformed sections for course {}: {e}", self.id))?;

        Ok(Course {
            id: CourseId::from(self.id),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            price_cents: self.price_cents,
            thumbnail: self.thumbnail.clone(),
            category: self.category.clone(),
            level,
            status,
            instructor_id: UserId::from(self.instructor_id),
            sections,
            rating: self.rating,
            rating_count: self.rating_count,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

impl ActiveModel {
    pub fn set_sections(&mut self, sections: &[Section]) -> Result<(), DbErr> {
        self.sections = Set(sections_to_json(sections)?);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_model(instructor_id: Uuid) -> Model {
    let course = crate::tests::support::course_fakes::sample_course(UserId::from(instructor_id));
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: course.id.value(),
        title: course.title,
        subtitle: course.subtitle,
        description: course.description,
        price_cents: 49900,
        thumbnail: None,
        category: course.category,
        level: "Beginner".to_string(),
        status: "Published".to_string(),
        instructor_id,
        sections: serde_json::to_value(&course.sections).unwrap(),
        rating: 4.5,
        rating_count: 2,
        created_at: now,
        updated_at: now,
    }
}
