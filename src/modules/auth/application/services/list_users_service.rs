use async_trait::async_trait;

use crate::{
    auth::application::{
        domain::entities::UserProfile,
        ports::{
            incoming::use_cases::{ListUsersError, ListUsersUseCase},
            outgoing::{UserListFilter, UserQuery},
        },
    },
    shared::pagination::{PageRequest, PageResult},
};

pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        mut filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserProfile>, ListUsersError> {
        filter.search = filter
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.query
            .list_users(filter, page)
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))
    }
}
