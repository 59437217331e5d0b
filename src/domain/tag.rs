// src/domain/tag.rs
use crate::domain::content::ContentKind;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::locale::LocalizedText;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagId(String);

impl TagId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("tag id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagId> for String {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: TagId,
    pub name: LocalizedText,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A tag that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: LocalizedText,
}

impl NewTag {
    pub fn new(name: impl Into<String>, name_ar: Option<String>) -> DomainResult<Self> {
        let name_ar = name_ar
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let name: String = name.into();
        Ok(Self {
            name: LocalizedText::required(name.trim(), name_ar, "tag name")?,
        })
    }

    /// Per-locale uniqueness: same primary name, or same Arabic name.
    pub fn collides_with(&self, tag: &Tag) -> bool {
        tag.name.primary() == self.name.primary()
            || matches!(
                (self.name.arabic(), tag.name.arabic()),
                (Some(a), Some(b)) if a == b
            )
    }
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: &TagId) -> DomainResult<Option<Tag>>;
    /// Idempotent: a tag colliding by name returns the existing record.
    async fn create(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn list(&self, request: &PageRequest) -> DomainResult<Page<Tag>>;
    async fn list_all(&self) -> DomainResult<Vec<Tag>>;
    /// Tags linked to at least one content item of `kind`.
    async fn list_for_kind(&self, kind: ContentKind) -> DomainResult<Vec<Tag>>;
}
