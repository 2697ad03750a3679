use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::category::application::{
    domain::entities::{slugify, Category},
    ports::outgoing::{
        CategoryQuery, CategoryQueryError, CategoryRepository, CategoryRepositoryError,
    },
};

/// In-memory category table serving both the repository and the query port.
#[derive(Clone, Default)]
pub struct FakeCategoryStore {
    categories: Arc<Mutex<Vec<Category>>>,
    fail: bool,
}

impl FakeCategoryStore {
    pub fn with_names(names: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut categories = store.categories.lock().unwrap();
            for name in names {
                categories.push(Category {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    slug: slugify(name),
                    created_at: Utc::now(),
                });
            }
        }
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.categories.lock().unwrap().iter().map(|c| c.id).collect()
    }
}

#[async_trait]
impl CategoryQuery for FakeCategoryStore {
    async fn list(&self) -> Result<Vec<Category>, CategoryQueryError> {
        if self.fail {
            return Err(CategoryQueryError::DatabaseError("boom".to_string()));
        }
        let mut all = self.categories.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, CategoryQueryError> {
        if self.fail {
            return Err(CategoryQueryError::DatabaseError("boom".to_string()));
        }
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name.trim())))
    }
}

#[async_trait]
impl CategoryRepository for FakeCategoryStore {
    async fn create(&self, name: &str, slug: &str) -> Result<Category, CategoryRepositoryError> {
        if self.fail {
            return Err(CategoryRepositoryError::DatabaseError("boom".to_string()));
        }
        let mut categories = self.categories.lock().unwrap();
        if categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name) || c.slug == slug)
        {
            return Err(CategoryRepositoryError::AlreadyExists);
        }
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            created_at: Utc::now(),
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn delete(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != category_id);
        if categories.len() == before {
            return Err(CategoryRepositoryError::NotFound);
        }
        Ok(())
    }
}
