pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_categories_table;
mod m20260301_000003_create_courses_table;
mod m20260301_000004_create_enrollments_table;
mod m20260301_000005_create_progress_table;
mod m20260301_000006_create_reviews_table;
mod m20260301_000007_create_certificates_table;
mod m20260301_000008_create_contact_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_categories_table::Migration),
            Box::new(m20260301_000003_create_courses_table::Migration),
            Box::new(m20260301_000004_create_enrollments_table::Migration),
            Box::new(m20260301_000005_create_progress_table::Migration),
            Box::new(m20260301_000006_create_reviews_table::Migration),
            Box::new(m20260301_000007_create_certificates_table::Migration),
            Box::new(m20260301_000008_create_contact_messages_table::Migration),
        ]
    }
}
