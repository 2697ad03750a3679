use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryResult, Statement,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::course::adapter::outgoing::sea_orm_entity::courses;
use crate::course::adapter::outgoing::CourseQueryPostgres;
use crate::course::application::domain::entities::CourseId;
use crate::enrollment::application::{
    domain::entities::{
        EnrolledStudent, Enrollment, EnrollmentOverview, EnrollmentStatus, MyCourse,
    },
    ports::outgoing::{EnrollmentQuery, EnrollmentQueryError},
};
use crate::progress::adapter::outgoing::sea_orm_entity::progress;
use crate::progress::application::domain::entities::compute_percent;

use super::sea_orm_entity::enrollments::{Column, Entity as EnrollmentEntity};

#[derive(Clone, Debug)]
pub struct EnrollmentQueryPostgres {
    db: Arc<DatabaseConnection>,
    courses: CourseQueryPostgres,
}

impl EnrollmentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            courses: CourseQueryPostgres::new(db.clone()),
            db,
        }
    }

    fn students_stmt(instructor_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                u.id AS user_id,
                u.name,
                u.email,
                c.id AS course_id,
                c.title AS course_title,
                e.enrolled_at,
                COALESCE(p.percent, 0) AS progress
            FROM enrollments e
            INNER JOIN courses c ON c.id = e.course_id
            INNER JOIN users u ON u.id = e.user_id
            LEFT JOIN progress p ON p.user_id = e.user_id AND p.course_id = e.course_id
            WHERE c.instructor_id = $1
              AND e.status = 'active'
            ORDER BY e.enrolled_at DESC
            "#,
            vec![instructor_id.into()],
        )
    }

    fn overview_stmt() -> Statement {
        Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                e.id AS enrollment_id,
                u.name AS student_name,
                u.email AS student_email,
                c.id AS course_id,
                c.title AS course_title,
                e.enrolled_at,
                e.payment_reference
            FROM enrollments e
            INNER JOIN courses c ON c.id = e.course_id
            INNER JOIN users u ON u.id = e.user_id
            WHERE e.status = 'active'
            ORDER BY e.enrolled_at DESC
            "#,
        )
    }

    fn map_student(row: &QueryResult) -> Result<EnrolledStudent, DbErr> {
        let enrolled_at: chrono::DateTime<chrono::FixedOffset> = row.try_get("", "enrolled_at")?;
        Ok(EnrolledStudent {
            user_id: UserId::from(row.try_get::<Uuid>("", "user_id")?),
            name: row.try_get("", "name")?,
            email: row.try_get("", "email")?,
            course_id: CourseId::from(row.try_get::<Uuid>("", "course_id")?),
            course_title: row.try_get("", "course_title")?,
            enrolled_at: enrolled_at.with_timezone(&chrono::Utc),
            progress: row.try_get("", "progress")?,
        })
    }

    fn map_overview(row: &QueryResult) -> Result<EnrollmentOverview, DbErr> {
        let enrolled_at: chrono::DateTime<chrono::FixedOffset> = row.try_get("", "enrolled_at")?;
        Ok(EnrollmentOverview {
            enrollment_id: row.try_get("", "enrollment_id")?,
            student_name: row.try_get("", "student_name")?,
            student_email: row.try_get("", "student_email")?,
            course_id: CourseId::from(row.try_get::<Uuid>("", "course_id")?),
            course_title: row.try_get("", "course_title")?,
            enrolled_at: enrolled_at.with_timezone(&chrono::Utc),
            payment_reference: row.try_get("", "payment_reference")?,
        })
    }
}

fn map_db_err(e: DbErr) -> EnrollmentQueryError {
    EnrollmentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EnrollmentQuery for EnrollmentQueryPostgres {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Enrollment>, EnrollmentQueryError> {
        let model = EnrollmentEntity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::CourseId.eq(course_id.value()))
            .filter(Column::Status.eq(EnrollmentStatus::Active.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(|m| m.to_enrollment().map_err(EnrollmentQueryError::DatabaseError))
            .transpose()
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<MyCourse>, EnrollmentQueryError> {
        let enrollments = EnrollmentEntity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::Status.eq(EnrollmentStatus::Active.as_str()))
            .order_by_desc(Column::EnrolledAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if enrollments.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<Uuid> = enrollments.iter().map(|e| e.course_id).collect();

        let course_models = courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids.clone()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let lesson_sets: HashMap<Uuid, HashSet<Uuid>> = course_models
            .iter()
            .map(|m| m.to_course().map(|c| (m.id, c.lesson_ids())))
            .collect::<Result<_, _>>()
            .map_err(EnrollmentQueryError::DatabaseError)?;

        let cards: HashMap<Uuid, _> = self
            .courses
            .to_cards(course_models)
            .await
            .map_err(|e| EnrollmentQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|card| (card.id.value(), card))
            .collect();

        let percents: HashMap<Uuid, i32> = progress::Entity::find()
            .filter(progress::Column::UserId.eq(user_id.value()))
            .filter(progress::Column::CourseId.is_in(course_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .iter()
            .map(|p| {
                let record = p.to_progress().map_err(EnrollmentQueryError::DatabaseError)?;
                let percent = lesson_sets
                    .get(&p.course_id)
                    .map(|lessons| compute_percent(&record.completed_lessons, lessons))
                    .unwrap_or(0);
                Ok::<_, EnrollmentQueryError>((p.course_id, percent))
            })
            .collect::<Result<_, _>>()?;

        Ok(enrollments
            .into_iter()
            .filter_map(|e| {
                let course = cards.get(&e.course_id)?.clone();
                Some(MyCourse {
                    course,
                    progress: percents.get(&e.course_id).copied().unwrap_or(0),
                    enrolled_at: e.enrolled_at.with_timezone(&chrono::Utc),
                })
            })
            .collect())
    }

    async fn list_students_for_instructor(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<EnrolledStudent>, EnrollmentQueryError> {
        let rows = self
            .db
            .query_all(Self::students_stmt(instructor_id.value()))
            .await
            .map_err(map_db_err)?;

        rows.iter()
            .map(|row| Self::map_student(row).map_err(map_db_err))
            .collect()
    }

    async fn list_all(&self) -> Result<Vec<EnrollmentOverview>, EnrollmentQueryError> {
        let rows = self
            .db
            .query_all(Self::overview_stmt())
            .await
            .map_err(map_db_err)?;

        rows.iter()
            .map(|row| Self::map_overview(row).map_err(map_db_err))
            .collect()
    }
}
