use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::application::domain::entities::CourseId;
use crate::review::application::{
    domain::entities::{CourseReview, InstructorReview, Review},
    ports::outgoing::{ReviewQuery, ReviewQueryError},
};

#[derive(Clone, Debug)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn course_reviews_stmt(course_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                r.id, r.user_id, r.course_id, r.rating, r.comment,
                r.created_at, r.updated_at,
                u.name AS reviewer_name
            FROM reviews r
            INNER JOIN users u ON u.id = r.user_id
            WHERE r.course_id = $1
            ORDER BY r.created_at DESC
            "#,
            vec![course_id.into()],
        )
    }

    fn instructor_reviews_stmt(instructor_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                r.id, r.user_id, r.course_id, r.rating, r.comment,
                r.created_at, r.updated_at,
                u.name AS reviewer_name,
                c.title AS course_title
            FROM reviews r
            INNER JOIN courses c ON c.id = r.course_id
            INNER JOIN users u ON u.id = r.user_id
            WHERE c.instructor_id = $1
            ORDER BY r.created_at DESC
            "#,
            vec![instructor_id.into()],
        )
    }

    fn map_review(row: &QueryResult) -> Result<Review, DbErr> {
        let created_at: chrono::DateTime<chrono::FixedOffset> = row.try_get("", "created_at")?;
        let updated_at: chrono::DateTime<chrono::FixedOffset> = row.try_get("", "updated_at")?;
        Ok(Review {
            id: row.try_get("", "id")?,
            user_id: UserId::from(row.try_get::<Uuid>("", "user_id")?),
            course_id: CourseId::from(row.try_get::<Uuid>("", "course_id")?),
            rating: row.try_get("", "rating")?,
            comment: row.try_get("", "comment")?,
            created_at: created_at.with_timezone(&chrono::Utc),
            updated_at: updated_at.with_timezone(&chrono::Utc),
        })
    }
}

fn map_db_err(e: DbErr) -> ReviewQueryError {
    ReviewQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn list_for_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<CourseReview>, ReviewQueryError> {
        let rows = self
            .db
            .query_all(Self::course_reviews_stmt(course_id.value()))
            .await
            .map_err(map_db_err)?;

        rows.iter()
            .map(|row| {
                Ok(CourseReview {
                    review: Self::map_review(row)?,
                    reviewer_name: row.try_get("", "reviewer_name")?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(map_db_err)
    }

    async fn list_for_instructor(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<InstructorReview>, ReviewQueryError> {
        let rows = self
            .db
            .query_all(Self::instructor_reviews_stmt(instructor_id.value()))
            .await
            .map_err(map_db_err)?;

        rows.iter()
            .map(|row| {
                Ok(InstructorReview {
                    review: Self::map_review(row)?,
                    reviewer_name: row.try_get("", "reviewer_name")?,
                    course_title: row.try_get("", "course_title")?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(map_db_err)
    }
}
