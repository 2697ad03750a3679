use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::auth::application::domain::entities::{
    InstructorStatus, UserId, UserProfile, UserRole,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(unique, column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub password_hash: String,

    #[sea_orm(column_type = "Text")]
    pub role: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub instructor_status: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub headline: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub website: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

impl Model {
    /// Maps the row to the public profile. Unknown enum strings surface as `Err`.
    pub fn to_profile(&self) -> Result<UserProfile, String> {
        let role = UserRole::parse(&self.role).ok_or_else(|| format!("unknown role '{}'", self.role))?;
        let instructor_status = match &self.instructor_status {
            Some(raw) => Some(
                InstructorStatus::parse(raw)
                    .ok_or_else(|| format!("unknown instructor status '{raw}'"))?,
            ),
            None => None,
        };

        Ok(UserProfile {
            id: UserId::from(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            role,
            instructor_status,
            headline: self.headline.clone(),
            bio: self.bio.clone(),
            website: self.website.clone(),
            linkedin: self.linkedin.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_model(role: &str, instructor_status: Option<&str>) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        role: role.to_string(),
        instructor_status: instructor_status.map(str::to_string),
        headline: None,
        bio: None,
        website: None,
        linkedin: None,
        created_at: now,
        updated_at: now,
    }
}
