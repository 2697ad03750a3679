mod delete_user;
mod get_profile;
mod list_users;
mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;
mod set_instructor_status;
mod update_profile;

pub use delete_user::*;
pub use get_profile::*;
pub use list_users::*;
pub use login_user::*;
pub use logout_user::*;
pub use refresh_token::*;
pub use register_user::*;
pub use set_instructor_status::*;
pub use update_profile::*;
