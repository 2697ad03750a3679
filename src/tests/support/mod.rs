pub mod app_state_builder;
pub mod auth_fakes;
pub mod category_fakes;
pub mod certificate_fakes;
pub mod contact_fakes;
pub mod course_fakes;
pub mod dashboard_fakes;
pub mod enrollment_fakes;
pub mod http;
pub mod notification_fakes;
pub mod payment_fakes;
pub mod progress_fakes;
pub mod review_fakes;

pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
