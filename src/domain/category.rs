// src/domain/category.rs
use crate::domain::errors::DomainResult;
use crate::domain::locale::LocalizedText;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: LocalizedText,
    pub description: Option<LocalizedText>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<Category>>;
}
