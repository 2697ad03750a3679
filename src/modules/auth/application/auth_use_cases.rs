use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetProfileUseCase, ListUsersUseCase, LoginUserUseCase, LogoutUseCase,
    RefreshTokenUseCase, RegisterUserUseCase, SetInstructorStatusUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUseCase + Send + Sync>,
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub set_instructor_status: Arc<dyn SetInstructorStatusUseCase + Send + Sync>,
}
