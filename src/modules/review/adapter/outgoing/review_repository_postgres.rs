use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::course::adapter::outgoing::sea_orm_entity::courses;
use crate::review::application::{
    domain::entities::{RatingSummary, Review},
    ports::outgoing::{NewReview, ReviewRepository, ReviewRepositoryError},
};

use super::sea_orm_entity::reviews::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn upsert_in(
        txn: &DatabaseTransaction,
        data: NewReview,
    ) -> Result<(Review, RatingSummary), DbErr> {
        let now = chrono::Utc::now().fixed_offset();
        let course_id = data.course_id.value();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.value()),
            course_id: Set(course_id),
            rating: Set(data.rating),
            comment: Set(data.comment),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = Entity::insert(active)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::CourseId])
                    .update_columns([Column::Rating, Column::Comment, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(txn)
            .await?;

        let summary = refresh_course_rating(txn, course_id).await?;

        Ok((saved.into(), summary))
    }
}

fn summary_stmt(course_id: Uuid) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        SELECT
            COALESCE(AVG(rating)::float8, 0) AS average,
            COUNT(*) AS total
        FROM reviews
        WHERE course_id = $1
        "#,
        vec![course_id.into()],
    )
}

/// Recomputes `courses.rating` and `rating_count` from the course's current reviews.
pub async fn refresh_course_rating<C>(conn: &C, course_id: Uuid) -> Result<RatingSummary, DbErr>
where
    C: ConnectionTrait,
{
    let row = conn
        .query_one(summary_stmt(course_id))
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("review summary".to_string()))?;
    let average: f64 = row.try_get("", "average")?;
    let total: i64 = row.try_get("", "total")?;
    let summary = RatingSummary::from_average(average, total);

    courses::Entity::update_many()
        .col_expr(courses::Column::Rating, Expr::value(summary.rating))
        .col_expr(courses::Column::RatingCount, Expr::value(summary.rating_count))
        .filter(courses::Column::Id.eq(course_id))
        .exec(conn)
        .await?;

    Ok(summary)
}

fn map_db_err(e: DbErr) -> ReviewRepositoryError {
    ReviewRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn upsert(
        &self,
        data: NewReview,
    ) -> Result<(Review, RatingSummary), ReviewRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::upsert_in(&txn, data).await {
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
