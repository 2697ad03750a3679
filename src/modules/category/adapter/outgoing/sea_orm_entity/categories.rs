use sea_orm::entity::prelude::*;

use crate::category::application::domain::entities::Category;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(unique, column_type = "Text")]
    pub name: String,

    #[sea_orm(unique, column_type = "Text")]
    pub slug: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Category {
            id: model.id,
            name: model.name,
            slug: model.slug,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(name: &str) -> Model {
    Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: crate::category::application::domain::entities::slugify(name),
        created_at: chrono::Utc::now().fixed_offset(),
    }
}
