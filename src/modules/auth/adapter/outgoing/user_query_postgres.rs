use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::outgoing::{UserCredentials, UserListFilter, UserQuery, UserQueryError},
};
use crate::shared::db::contains_pattern;
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::users::{Column, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

fn to_profile(model: &UserModel) -> Result<UserProfile, UserQueryError> {
    model.to_profile().map_err(UserQueryError::DatabaseError)
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserProfile>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        user.as_ref().map(to_profile).transpose()
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        let user = UserEntity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match user {
            Some(model) => Ok(Some(UserCredentials {
                profile: to_profile(&model)?,
                password_hash: model.password_hash,
            })),
            None => Ok(None),
        }
    }

    async fn list_users(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserProfile>, UserQueryError> {
        let mut query = UserEntity::find();

        if let Some(ref search) = filter.search {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::Email).ilike(&pattern)),
            );
        }

        if let Some(role) = filter.role {
            query = query.filter(Column::Role.eq(role.as_str()));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let users = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = users.iter().map(to_profile).collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}
