use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::dashboard::application::{
    domain::entities::{CoursePerformance, PlatformStats},
    ports::outgoing::{DashboardQuery, DashboardQueryError, InstructorTotals, MonthCount},
};

#[derive(Clone, Debug)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn one(&self, stmt: Statement) -> Result<QueryResult, DashboardQueryError> {
        self.db
            .query_one(stmt)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| DashboardQueryError::DatabaseError("aggregate returned no row".into()))
    }
}

fn map_db_err(e: DbErr) -> DashboardQueryError {
    DashboardQueryError::DatabaseError(e.to_string())
}

fn map_totals(row: &QueryResult) -> Result<InstructorTotals, DbErr> {
    Ok(InstructorTotals {
        total_students: row.try_get("", "total_students")?,
        total_revenue_cents: row.try_get("", "total_revenue_cents")?,
        active_courses: row.try_get("", "active_courses")?,
        average_rating: row.try_get("", "average_rating")?,
        total_reviews: row.try_get("", "total_reviews")?,
    })
}

fn map_platform(row: &QueryResult) -> Result<PlatformStats, DbErr> {
    Ok(PlatformStats {
        users: row.try_get("", "users")?,
        courses: row.try_get("", "courses")?,
        enrollments: row.try_get("", "enrollments")?,
        revenue_cents: row.try_get("", "revenue_cents")?,
    })
}

#[async_trait]
impl DashboardQuery for DashboardQueryPostgres {
    async fn instructor_totals(
        &self,
        instructor_id: UserId,
    ) -> Result<InstructorTotals, DashboardQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                (SELECT COUNT(DISTINCT e.user_id)
                   FROM enrollments e
                   JOIN courses c ON c.id = e.course_id
                  WHERE c.instructor_id = $1 AND e.status = 'active') AS total_students,
                (SELECT COALESCE(SUM(c.price_cents), 0)::bigint
                   FROM enrollments e
                   JOIN courses c ON c.id = e.course_id
                  WHERE c.instructor_id = $1 AND e.status = 'active') AS total_revenue_cents,
                (SELECT COUNT(*)
                   FROM courses c
                  WHERE c.instructor_id = $1 AND c.status = 'Published') AS active_courses,
                (SELECT AVG(c.rating)::float8
                   FROM courses c
                  WHERE c.instructor_id = $1 AND c.rating_count > 0) AS average_rating,
                (SELECT COUNT(*)
                   FROM reviews r
                   JOIN courses c ON c.id = r.course_id
                  WHERE c.instructor_id = $1) AS total_reviews
            "#,
            vec![instructor_id.value().into()],
        );

        let row = self.one(stmt).await?;
        map_totals(&row).map_err(map_db_err)
    }

    async fn monthly_enrollments(
        &self,
        instructor_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<MonthCount>, DashboardQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                EXTRACT(YEAR FROM e.enrolled_at AT TIME ZONE 'UTC')::int AS year,
                EXTRACT(MONTH FROM e.enrolled_at AT TIME ZONE 'UTC')::int AS month,
                COUNT(*) AS enrollments
            FROM enrollments e
            JOIN courses c ON c.id = e.course_id
            WHERE c.instructor_id = $1
              AND e.status = 'active'
              AND e.enrolled_at >= $2
            GROUP BY 1, 2
            ORDER BY 1, 2
            "#,
            vec![instructor_id.value().into(), since.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(map_db_err)?;
        rows.iter()
            .map(|row| {
                Ok(MonthCount {
                    year: row.try_get("", "year")?,
                    month: row.try_get::<i32>("", "month")? as u32,
                    enrollments: row.try_get("", "enrollments")?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(map_db_err)
    }

    async fn top_courses(
        &self,
        instructor_id: UserId,
        limit: u64,
    ) -> Result<Vec<CoursePerformance>, DashboardQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                c.title AS name,
                (COUNT(e.id) * c.price_cents)::bigint AS revenue_cents,
                COUNT(e.id) AS students
            FROM courses c
            LEFT JOIN enrollments e ON e.course_id = c.id AND e.status = 'active'
            WHERE c.instructor_id = $1
            GROUP BY c.id, c.title, c.price_cents
            ORDER BY revenue_cents DESC, students DESC, c.title
            LIMIT $2
            "#,
            vec![instructor_id.value().into(), (limit as i64).into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(map_db_err)?;
        rows.iter()
            .map(|row| {
                Ok(CoursePerformance {
                    name: row.try_get("", "name")?,
                    revenue_cents: row.try_get("", "revenue_cents")?,
                    students: row.try_get("", "students")?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(map_db_err)
    }

    async fn platform_stats(&self) -> Result<PlatformStats, DashboardQueryError> {
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS users,
                (SELECT COUNT(*) FROM courses) AS courses,
                (SELECT COUNT(*) FROM enrollments WHERE status = 'active') AS enrollments,
                (SELECT COALESCE(SUM(c.price_cents), 0)::bigint
                   FROM enrollments e
                   JOIN courses c ON c.id = e.course_id
                  WHERE e.status = 'active') AS revenue_cents
            "#,
        );

        let row = self.one(stmt).await?;
        map_platform(&row).map_err(map_db_err)
    }
}
