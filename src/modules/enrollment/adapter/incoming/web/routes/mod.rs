mod enroll;
mod list_enrollments;

pub use enroll::*;
pub use list_enrollments::*;
