pub mod entities;
pub mod policies;
