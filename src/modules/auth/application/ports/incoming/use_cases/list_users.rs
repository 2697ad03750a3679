use async_trait::async_trait;

use crate::{
    auth::application::{domain::entities::UserProfile, ports::outgoing::UserListFilter},
    shared::pagination::{PageRequest, PageResult},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserProfile>, ListUsersError>;
}
