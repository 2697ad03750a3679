use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{InstructorStatus, UserId, UserProfile},
    ports::outgoing::{CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError},
};
use crate::review::adapter::outgoing::refresh_course_rating;
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)
    }

    fn reviewed_courses_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT DISTINCT course_id FROM reviews WHERE user_id = $1",
            vec![user_id.into()],
        )
    }

    /// Deletes the user and refreshes the rating of every course they reviewed,
    /// since their reviews leave with them through the FK cascade.
    async fn delete_in(txn: &DatabaseTransaction, user_id: Uuid) -> Result<bool, DbErr> {
        let course_ids = txn
            .query_all(Self::reviewed_courses_stmt(user_id))
            .await?
            .iter()
            .map(|row| row.try_get::<Uuid>("", "course_id"))
            .collect::<Result<Vec<_>, _>>()?;

        let result = UserEntity::delete_by_id(user_id).exec(txn).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        for course_id in course_ids {
            refresh_course_rating(txn, course_id).await?;
        }
        Ok(true)
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

fn to_profile(model: UserModel) -> Result<UserProfile, UserRepositoryError> {
    model.to_profile().map_err(UserRepositoryError::DatabaseError)
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserProfile, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            instructor_status: Set(data.instructor_status.map(|s| s.as_str().to_string())),
            headline: Set(None),
            bio: Set(None),
            website: Set(None),
            linkedin: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            map_db_err(e)
        })?;

        to_profile(inserted)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<UserProfile, UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();

        if let Some(name) = data.name {
            active_user.name = Set(name);
        }
        if let Some(headline) = data.headline {
            active_user.headline = Set(headline);
        }
        if let Some(bio) = data.bio {
            active_user.bio = Set(bio);
        }
        if let Some(website) = data.website {
            active_user.website = Set(website);
        }
        if let Some(linkedin) = data.linkedin {
            active_user.linkedin = Set(linkedin);
        }

        let updated = active_user.update(&*self.db).await.map_err(map_db_err)?;
        to_profile(updated)
    }

    async fn set_instructor_status(
        &self,
        user_id: UserId,
        status: InstructorStatus,
    ) -> Result<UserProfile, UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();
        active_user.instructor_status = Set(Some(status.as_str().to_string()));

        let updated = active_user.update(&*self.db).await.map_err(map_db_err)?;
        to_profile(updated)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::delete_in(&txn, user_id.value()).await {
            Ok(true) => txn.commit().await.map_err(map_db_err),
            Ok(false) => {
                let _ = txn.rollback().await;
                Err(UserRepositoryError::UserNotFound)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(map_db_err(e))
            }
        }
    }
}
