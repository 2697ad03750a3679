pub mod course_query_postgres;
pub mod course_repository_postgres;
pub mod sea_orm_entity;

pub use course_query_postgres::CourseQueryPostgres;
pub use course_repository_postgres::CourseRepositoryPostgres;
