use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::{ContactMessage, ContactStatus},
    ports::outgoing::{ContactRepository, ContactRepositoryError, NewContactMessage},
};

use super::sea_orm_entity::contact_messages::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(&self, data: NewContactMessage) -> Result<ContactMessage, ContactRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            status: Set(ContactStatus::New.as_str().to_string()),
            reply_subject: Set(None),
            reply_body: Set(None),
            replied_at: Set(None),
            created_at: Set(chrono::Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn find(&self, id: Uuid) -> Result<Option<ContactMessage>, ContactRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(ContactMessage::from))
    }

    async fn list(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let mut query = Entity::find().order_by_desc(Column::CreatedAt);
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(ContactMessage::from).collect())
    }

    async fn mark_replied(
        &self,
        id: Uuid,
        subject: &str,
        body: &str,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Status, Expr::value(ContactStatus::Replied.as_str()))
            .col_expr(Column::ReplySubject, Expr::value(subject.to_string()))
            .col_expr(Column::ReplyBody, Expr::value(body.to_string()))
            .col_expr(Column::RepliedAt, Expr::value(chrono::Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(ContactStatus::New.as_str()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Zero rows means the message is missing or was replied concurrently.
        let current = self.find(id).await?.ok_or(ContactRepositoryError::NotFound)?;
        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::AlreadyReplied);
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
        sample_model, Model,
    };
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn create_stores_new_message() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(false)]])
            .into_connection();
        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        let message = repo
            .create(NewContactMessage {
                name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
                subject: "Refund".to_string(),
                message: "Please refund my order".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(message.status, ContactStatus::New);
        assert!(message.reply.is_none());
    }

    #[tokio::test]
    async fn mark_replied_returns_updated_message() {
        let model = sample_model(true);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1)])
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        let message = repo.mark_replied(model.id, "Re: Refund", "Done.").await.unwrap();

        assert!(message.is_replied());
        assert_eq!(message.reply.unwrap().body, "Done.");
    }

    #[tokio::test]
    async fn mark_replied_twice_is_rejected() {
        let model = sample_model(true);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0)])
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        let result = repo.mark_replied(model.id, "Re: Refund", "Again").await;

        assert_eq!(result.unwrap_err(), ContactRepositoryError::AlreadyReplied);
    }

    #[tokio::test]
    async fn mark_replied_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0)])
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();
        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        let result = repo.mark_replied(Uuid::new_v4(), "Re", "Body").await;

        assert_eq!(result.unwrap_err(), ContactRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn list_failure_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("down".to_string()))])
            .into_connection();
        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        let result = repo.list(Some(ContactStatus::New)).await;

        assert!(matches!(result, Err(ContactRepositoryError::DatabaseError(_))));
    }
}
