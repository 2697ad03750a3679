use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::certificate::application::{
    domain::entities::{Certificate, MyCertificate},
    ports::outgoing::{CertificateRepository, CertificateRepositoryError, NewCertificate},
};
use crate::course::application::domain::entities::CourseId;
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::certificates::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct CertificateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn my_certificates_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                cert.id, cert.certificate_id, cert.user_id, cert.course_id, cert.issued_at,
                c.title AS course_title,
                c.thumbnail AS course_thumbnail
            FROM certificates cert
            INNER JOIN courses c ON c.id = cert.course_id
            WHERE cert.user_id = $1
            ORDER BY cert.issued_at DESC
            "#,
            vec![user_id.into()],
        )
    }
}

fn map_db_err(e: DbErr) -> CertificateRepositoryError {
    if is_unique_violation(&e) {
        // `certificates_certificate_id_key` guards the public id; the pair index guards re-issue.
        if e.to_string().contains("certificate_id") {
            return CertificateRepositoryError::IdCollision;
        }
        return CertificateRepositoryError::AlreadyIssued;
    }
    CertificateRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CertificateRepository for CertificateRepositoryPostgres {
    async fn find(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<Option<Certificate>, CertificateRepositoryError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::CourseId.eq(course_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Certificate::from))
    }

    async fn create(&self, data: NewCertificate) -> Result<Certificate, CertificateRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            certificate_id: Set(data.certificate_id),
            user_id: Set(data.user_id.value()),
            course_id: Set(data.course_id.value()),
            issued_at: Set(chrono::Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<MyCertificate>, CertificateRepositoryError> {
        let rows = self
            .db
            .query_all(Self::my_certificates_stmt(user_id.value()))
            .await
            .map_err(map_db_err)?;

        rows.iter()
            .map(|row| {
                let issued_at: chrono::DateTime<chrono::FixedOffset> =
                    row.try_get("", "issued_at")?;
                Ok(MyCertificate {
                    certificate: Certificate {
                        id: row.try_get("", "id")?,
                        certificate_id: row.try_get("", "certificate_id")?,
                        user_id: UserId::from(row.try_get::<Uuid>("", "user_id")?),
                        course_id: CourseId::from(row.try_get::<Uuid>("", "course_id")?),
                        issued_at: issued_at.with_timezone(&chrono::Utc),
                    },
                    course_title: row.try_get("", "course_title")?,
                    course_thumbnail: row.try_get("", "course_thumbnail")?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(map_db_err)
    }
}
