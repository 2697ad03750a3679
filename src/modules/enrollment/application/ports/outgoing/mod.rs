pub mod enrollment_query;
pub mod enrollment_repository;

pub use enrollment_query::{EnrollmentQuery, EnrollmentQueryError};
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError, NewEnrollment};
