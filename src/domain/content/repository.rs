// src/domain/content/repository.rs
use crate::domain::content::entity::{ContentFilter, ContentItem, NewContentItem};
use crate::domain::content::value_objects::{ContentId, ContentKind, ContentStatus};
use crate::domain::errors::DomainResult;
use crate::domain::file::FileDescriptor;
use crate::domain::pagination::Page;
use crate::domain::tag::TagId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Data access for one content kind.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    fn kind(&self) -> ContentKind;
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem>;
    async fn find_by_id(&self, id: &ContentId) -> DomainResult<Option<ContentItem>>;
    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<ContentItem>>;
    async fn list_published(&self) -> DomainResult<Vec<ContentItem>>;
    /// Appends links in order. Fails with a conflict when a link already exists.
    async fn attach_tags(&self, id: &ContentId, tags: &[TagId]) -> DomainResult<()>;
    async fn set_featured_media(&self, id: &ContentId, file: &FileDescriptor) -> DomainResult<()>;
    async fn attach_file(&self, id: &ContentId, file: &FileDescriptor) -> DomainResult<()>;
    async fn set_status(
        &self,
        id: &ContentId,
        status: ContentStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<ContentItem>;
    async fn delete(&self, id: &ContentId) -> DomainResult<()>;
}

/// One repository per content kind.
#[derive(Clone)]
pub struct ContentRepositories {
    pub articles: Arc<dyn ContentRepository>,
    pub tenders: Arc<dyn ContentRepository>,
    pub announcements: Arc<dyn ContentRepository>,
}

impl ContentRepositories {
    pub fn for_kind(&self, kind: ContentKind) -> &Arc<dyn ContentRepository> {
        match kind {
            ContentKind::Article => &self.articles,
            ContentKind::Tender => &self.tenders,
            ContentKind::Announcement => &self.announcements,
        }
    }
}
