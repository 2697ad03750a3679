use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QuerySelect, Set, Statement, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::progress::application::{
    domain::entities::Progress,
    ports::outgoing::{ProgressRepository, ProgressRepositoryError},
};

use super::sea_orm_entity::progress::{lessons_to_json, ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ProgressRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProgressRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn ensure_row_stmt(user_id: Uuid, course_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO progress (id, user_id, course_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, course_id) DO NOTHING
            "#,
            vec![Uuid::new_v4().into(), user_id.into(), course_id.into()],
        )
    }

    async fn toggle_in(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        course_id: Uuid,
        lesson_id: Uuid,
        course_lessons: &HashSet<Uuid>,
    ) -> Result<(Progress, bool), DbErr> {
        txn.execute(Self::ensure_row_stmt(user_id, course_id)).await?;

        let locked = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("progress".to_string()))?;

        let mut progress = locked.to_progress().map_err(DbErr::Custom)?;
        let completed = progress.toggle(lesson_id);
        progress.recompute(course_lessons);
        progress.updated_at = chrono::Utc::now();

        Entity::update_many()
            .col_expr(
                Column::CompletedLessons,
                Expr::value(lessons_to_json(&progress.completed_lessons)),
            )
            .col_expr(Column::Percent, Expr::value(progress.percent))
            .col_expr(Column::UpdatedAt, Expr::value(progress.updated_at.fixed_offset()))
            .filter(Column::Id.eq(locked.id))
            .exec(txn)
            .await?;

        Ok((progress, completed))
    }
}

fn map_db_err(e: DbErr) -> ProgressRepositoryError {
    ProgressRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProgressRepository for ProgressRepositoryPostgres {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Progress>, ProgressRepositoryError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::CourseId.eq(course_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(|m| m.to_progress().map_err(ProgressRepositoryError::DatabaseError))
            .transpose()
    }

    async fn save(&self, progress: Progress) -> Result<Progress, ProgressRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(progress.user_id.value()),
            course_id: Set(progress.course_id.value()),
            completed_lessons: Set(lessons_to_json(&progress.completed_lessons)),
            percent: Set(progress.percent),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // One row per (user, course); a second save replaces the lesson set.
        let saved = Entity::insert(active)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::CourseId])
                    .update_columns([Column::CompletedLessons, Column::Percent, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        saved
            .to_progress()
            .map_err(ProgressRepositoryError::DatabaseError)
    }

    async fn toggle_lesson(
        &self,
        user_id: UserId,
        course_id: CourseId,
        lesson_id: Uuid,
        course_lessons: &HashSet<Uuid>,
    ) -> Result<(Progress, bool), ProgressRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::toggle_in(&txn, user_id.value(), course_id.value(), lesson_id, course_lessons)
            .await
        {
            Ok(result) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(result)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(map_db_err(e))
            }
        }
    }
}
