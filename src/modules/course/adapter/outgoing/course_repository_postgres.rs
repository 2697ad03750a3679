use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::course::application::{
    domain::entities::{Course, CourseId},
    ports::outgoing::{CourseChanges, CourseRepository, CourseRepositoryError, NewCourse},
};

use super::sea_orm_entity::courses::{
    sections_to_json, ActiveModel as CourseActiveModel, Entity as CourseEntity,
    Model as CourseModel,
};

#[derive(Clone, Debug)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CourseRepositoryError {
    CourseRepositoryError::DatabaseError(e.to_string())
}

fn to_course(model: CourseModel) -> Result<Course, CourseRepositoryError> {
    model.to_course().map_err(CourseRepositoryError::DatabaseError)
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create(&self, data: NewCourse) -> Result<Course, CourseRepositoryError> {
        let active = CourseActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            subtitle: Set(data.subtitle),
            description: Set(data.description),
            price_cents: Set(data.price_cents),
            thumbnail: Set(data.thumbnail),
            category: Set(data.category),
            level: Set(data.level.as_str().to_string()),
            status: Set(data.status.as_str().to_string()),
            instructor_id: Set(data.instructor_id.value()),
            sections: Set(sections_to_json(&data.sections).map_err(map_db_err)?),
            rating: Set(0.0),
            rating_count: Set(0),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        to_course(inserted)
    }

    async fn update(
        &self,
        course_id: CourseId,
        changes: CourseChanges,
    ) -> Result<Course, CourseRepositoryError> {
        let mut active: CourseActiveModel = CourseEntity::find_by_id(course_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CourseRepositoryError::NotFound)?
            .into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(subtitle) = changes.subtitle {
            active.subtitle = Set(subtitle);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(price_cents) = changes.price_cents {
            active.price_cents = Set(price_cents);
        }
        if let Some(thumbnail) = changes.thumbnail {
            active.thumbnail = Set(thumbnail);
        }
        if let Some(category) = changes.category {
            active.category = Set(category);
        }
        if let Some(level) = changes.level {
            active.level = Set(level.as_str().to_string());
        }
        if let Some(status) = changes.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(sections) = changes.sections {
            active.set_sections(&sections).map_err(map_db_err)?;
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        to_course(updated)
    }

    async fn delete(&self, course_id: CourseId) -> Result<(), CourseRepositoryError> {
        let result = CourseEntity::delete_by_id(course_id.value())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CourseRepositoryError::NotFound);
        }
        Ok(())
    }
}
