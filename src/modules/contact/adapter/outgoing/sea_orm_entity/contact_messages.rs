use sea_orm::entity::prelude::*;

use crate::contact::application::domain::entities::{ContactMessage, ContactReply, ContactStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    pub subject: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub status: String,

    #[sea_orm(nullable)]
    pub reply_subject: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub reply_body: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub replied_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactMessage {
    fn from(model: Model) -> Self {
        let reply = match (model.reply_subject, model.reply_body, model.replied_at) {
            (Some(subject), Some(body), Some(replied_at)) => Some(ContactReply {
                subject,
                body,
                replied_at: replied_at.with_timezone(&chrono::Utc),
            }),
            _ => None,
        };

        ContactMessage {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            status: ContactStatus::parse(&model.status).unwrap_or(ContactStatus::New),
            reply,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(replied: bool) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Refund".to_string(),
        message: "Please refund my order".to_string(),
        status: if replied { "replied" } else { "new" }.to_string(),
        reply_subject: replied.then(|| "Re: Refund".to_string()),
        reply_body: replied.then(|| "Done.".to_string()),
        replied_at: replied.then_some(now),
        created_at: now,
    }
}
