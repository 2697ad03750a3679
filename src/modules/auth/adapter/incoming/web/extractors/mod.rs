mod auth;

pub use auth::{AdminUser, AuthenticatedUser, InstructorUser, OptionalUser};
