use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::course::application::{
    domain::entities::{Course, CourseCard, CourseId, CourseRecord, CourseStatus},
    ports::outgoing::{CourseFilter, CourseQuery, CourseQueryError},
};
use crate::enrollment::adapter::outgoing::sea_orm_entity::enrollments;
use crate::shared::db::{contains_pattern, escape_like};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::courses::{Column, Entity as CourseEntity, Model as CourseModel};

#[derive(Debug, FromQueryResult)]
struct EnrollmentCount {
    course_id: Uuid,
    students: i64,
}

#[derive(Clone, Debug)]
pub struct CourseQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn instructor_names(
        &self,
        ids: HashSet<Uuid>,
    ) -> Result<HashMap<Uuid, String>, CourseQueryError> {
        let rows = users::Entity::find()
            .filter(users::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|u| (u.id, u.name)).collect())
    }

    async fn enrollment_counts(
        &self,
        course_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, u64>, CourseQueryError> {
        let rows = enrollments::Entity::find()
            .select_only()
            .column(enrollments::Column::CourseId)
            .column_as(enrollments::Column::Id.count(), "students")
            .filter(enrollments::Column::CourseId.is_in(course_ids))
            .group_by(enrollments::Column::CourseId)
            .into_model::<EnrollmentCount>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| (r.course_id, r.students.max(0) as u64))
            .collect())
    }

    /// Resolves instructor names and enrollment counts with one query each.
    pub async fn to_cards(&self, models: Vec<CourseModel>) -> Result<Vec<CourseCard>, CourseQueryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let courses = models
            .iter()
            .map(to_course)
            .collect::<Result<Vec<_>, _>>()?;

        let names = self
            .instructor_names(courses.iter().map(|c| c.instructor_id.value()).collect())
            .await?;
        let counts = self
            .enrollment_counts(courses.iter().map(|c| c.id.value()).collect())
            .await?;

        Ok(courses
            .iter()
            .map(|course| {
                CourseCard::new(
                    course,
                    names
                        .get(&course.instructor_id.value())
                        .cloned()
                        .unwrap_or_default(),
                    counts.get(&course.id.value()).copied().unwrap_or(0),
                )
            })
            .collect())
    }

    async fn cards_for(&self, query: Select<CourseEntity>) -> Result<Vec<CourseCard>, CourseQueryError> {
        let models = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.to_cards(models).await
    }
}

fn map_db_err(e: DbErr) -> CourseQueryError {
    CourseQueryError::DatabaseError(e.to_string())
}

fn to_course(model: &CourseModel) -> Result<Course, CourseQueryError> {
    model.to_course().map_err(CourseQueryError::DatabaseError)
}

#[async_trait]
impl CourseQuery for CourseQueryPostgres {
    async fn find_by_id(&self, course_id: CourseId) -> Result<Option<Course>, CourseQueryError> {
        let model = CourseEntity::find_by_id(course_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.as_ref().map(to_course).transpose()
    }

    async fn find_record(
        &self,
        course_id: CourseId,
    ) -> Result<Option<CourseRecord>, CourseQueryError> {
        let Some(course) = self.find_by_id(course_id).await? else {
            return Ok(None);
        };

        let instructor_name = users::Entity::find_by_id(course.instructor_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|u| u.name)
            .unwrap_or_default();

        let enrolled_students = enrollments::Entity::find()
            .filter(enrollments::Column::CourseId.eq(course_id.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(CourseRecord {
            course,
            instructor_name,
            enrolled_students,
        }))
    }

    async fn list_published(
        &self,
        filter: CourseFilter,
        page: PageRequest,
    ) -> Result<PageResult<CourseCard>, CourseQueryError> {
        let mut query =
            CourseEntity::find().filter(Column::Status.eq(CourseStatus::Published.as_str()));

        if let Some(ref search) = filter.search {
            query = query.filter(Expr::col(Column::Title).ilike(contains_pattern(search)));
        }
        if let Some(ref category) = filter.category {
            query = query.filter(Expr::col(Column::Category).ilike(escape_like(category.trim())));
        }
        if let Some(level) = filter.level {
            query = query.filter(Column::Level.eq(level.as_str()));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: self.to_cards(models).await?,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn list_by_instructor(
        &self,
        instructor_id: UserId,
    ) -> Result<Vec<CourseCard>, CourseQueryError> {
        self.cards_for(CourseEntity::find().filter(Column::InstructorId.eq(instructor_id.value())))
            .await
    }

    async fn list_all(
        &self,
        status: Option<CourseStatus>,
    ) -> Result<Vec<CourseCard>, CourseQueryError> {
        let mut query = CourseEntity::find();
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        self.cards_for(query).await
    }
}
