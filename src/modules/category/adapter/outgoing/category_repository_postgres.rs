use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::{
    domain::entities::Category,
    ports::outgoing::{CategoryRepository, CategoryRepositoryError},
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::categories::{ActiveModel, Entity as CategoryEntity};

#[derive(Clone, Debug)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CategoryRepositoryError {
    CategoryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create(&self, name: &str, slug: &str) -> Result<Category, CategoryRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            slug: Set(slug.to_string()),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return CategoryRepositoryError::AlreadyExists;
            }
            map_db_err(e)
        })?;

        Ok(inserted.into())
    }

    async fn delete(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = CategoryEntity::delete_by_id(category_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::NotFound);
        }
        Ok(())
    }
}
