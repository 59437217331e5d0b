// src/domain/content/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::content::value_objects::{ContentId, ContentKind, ContentStatus};
use crate::domain::file::FileDescriptor;
use crate::domain::locale::LocalizedText;
use crate::domain::pagination::PageRequest;
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// An article, tender or announcement together with its attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub summary: LocalizedText,
    pub status: ContentStatus,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub closing_date: Option<DateTime<Utc>>,
    pub tags: Vec<Tag>,
    pub files: Vec<FileDescriptor>,
    pub featured_media: Option<FileDescriptor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }

    pub fn has_tag(&self, tag_id: &TagId) -> bool {
        self.tags.iter().any(|tag| &tag.id == tag_id)
    }

    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author_id == user
    }
}

/// Bare content row inserted before tags and media are attached.
#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub kind: ContentKind,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub summary: LocalizedText,
    pub status: ContentStatus,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub closing_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub page: PageRequest,
    pub status: Option<ContentStatus>,
    pub tag_id: Option<TagId>,
}

impl ContentFilter {
    pub fn new(page: PageRequest) -> Self {
        Self {
            page,
            status: None,
            tag_id: None,
        }
    }

    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_tag(mut self, tag_id: TagId) -> Self {
        self.tag_id = Some(tag_id);
        self
    }
}
