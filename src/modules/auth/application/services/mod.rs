mod delete_user_service;
mod get_profile_service;
mod list_users_service;
mod login_user_service;
mod logout_user_service;
mod refresh_token_service;
mod register_user_service;
mod session;
mod set_instructor_status_service;
pub mod token_hasher;
mod update_profile_service;

pub use delete_user_service::DeleteUserService;
pub use get_profile_service::GetProfileService;
pub use list_users_service::ListUsersService;
pub use login_user_service::LoginUserService;
pub use logout_user_service::LogoutUserService;
pub use refresh_token_service::RefreshTokenService;
pub use register_user_service::RegisterUserService;
pub use set_instructor_status_service::SetInstructorStatusService;
pub use update_profile_service::UpdateProfileService;
