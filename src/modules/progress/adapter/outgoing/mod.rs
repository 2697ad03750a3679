pub mod progress_repository_postgres;
pub mod sea_orm_entity;

pub use progress_repository_postgres::ProgressRepositoryPostgres;
