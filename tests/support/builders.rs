// tests/support/builders.rs
use super::mocks::fixed_now;
use chrono::{DateTime, Duration, Utc};
use content_hub::domain::content::{ContentId, ContentItem, ContentKind, ContentStatus};
use content_hub::domain::locale::LocalizedText;
use content_hub::domain::tag::{Tag, TagId};
use content_hub::domain::user::UserId;

pub fn tag(id: &str, name: &str, name_ar: Option<&str>) -> Tag {
    Tag {
        id: TagId::new(id).unwrap(),
        name: LocalizedText::new(name, name_ar.map(str::to_string)),
        created_at: None,
        updated_at: None,
    }
}

pub struct ContentItemBuilder {
    id: String,
    kind: ContentKind,
    title: String,
    title_ar: Option<String>,
    status: ContentStatus,
    author_id: i64,
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
}

impl ContentItemBuilder {
    pub fn new(kind: ContentKind, id: &str) -> Self {
        Self {
            id: id.into(),
            kind,
            title: format!("{kind} {id}"),
            title_ar: None,
            status: ContentStatus::Draft,
            author_id: 1,
            tags: Vec::new(),
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: &str, title_ar: Option<&str>) -> Self {
        self.title = title.into();
        self.title_ar = title_ar.map(str::to_string);
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ContentStatus::Published;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// 固定時刻からの相対分で作成日時をずらす
    pub fn created_minutes_later(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> ContentItem {
        ContentItem {
            id: ContentId::new(self.id).unwrap(),
            kind: self.kind,
            title: LocalizedText::new(self.title, self.title_ar),
            description: LocalizedText::default(),
            summary: LocalizedText::default(),
            status: self.status,
            author_id: UserId::new(self.author_id).unwrap(),
            category_id: None,
            closing_date: None,
            tags: self.tags,
            files: Vec::new(),
            featured_media: None,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
