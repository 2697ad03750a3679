use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;

use crate::category::application::{
    domain::entities::Category,
    ports::outgoing::{CategoryQuery, CategoryQueryError},
};

use super::sea_orm_entity::categories::{Column, Entity as CategoryEntity};

#[derive(Clone, Debug)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CategoryQueryError {
    CategoryQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let rows = CategoryEntity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, CategoryQueryError> {
        let count = CategoryEntity::find()
            .filter(Expr::col(Column::Name).ilike(name.trim()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}
