mod delete_user;
mod get_profile;
mod list_users;
mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;
mod set_instructor_status;
mod update_profile;

pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginUserUseCase};
pub use logout_user::{LogoutCommand, LogoutError, LogoutUseCase};
pub use refresh_token::{RefreshTokenError, RefreshTokenUseCase, RefreshedToken};
pub use register_user::{
    AuthSession, RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
    RegisterUserUseCase,
};
pub use set_instructor_status::{SetInstructorStatusError, SetInstructorStatusUseCase};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
};
