pub mod auth;
pub mod category;
pub mod certificate;
pub mod contact;
pub mod course;
pub mod dashboard;
pub mod email;
pub mod enrollment;
pub mod media;
pub mod payment;
pub mod progress;
pub mod review;
pub mod tutor;
