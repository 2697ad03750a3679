use async_trait::async_trait;

use crate::category::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{ListCategoriesError, ListCategoriesUseCase},
        outgoing::CategoryQuery,
    },
};

pub struct ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCategoriesUseCase for ListCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Category>, ListCategoriesError> {
        self.query
            .list()
            .await
            .map_err(|e| ListCategoriesError::QueryError(e.to_string()))
    }
}
