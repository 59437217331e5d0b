// tests/support/mocks/content_repo.rs
use super::tag_repo::InMemoryTagRepo;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use content_hub::domain::content::{
    ContentFilter, ContentId, ContentItem, ContentKind, ContentRepository, ContentStatus,
    NewContentItem,
};
use content_hub::domain::errors::{DomainError, DomainResult};
use content_hub::domain::file::FileDescriptor;
use content_hub::domain::locale::LocalizedText;
use content_hub::domain::pagination::{Page, SortDirection, SortField};
use content_hub::domain::tag::TagId;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// 種別ごとのインメモリコンテンツストア。タグはタグストアを参照して解決する。
pub struct InMemoryContentRepo {
    kind: ContentKind,
    items: Mutex<Vec<ContentItem>>,
    tags: Arc<InMemoryTagRepo>,
    next_id: AtomicU64,
    fail_deletes: AtomicBool,
    reject_tag_links: AtomicBool,
}

impl InMemoryContentRepo {
    pub fn new(kind: ContentKind, tags: Arc<InMemoryTagRepo>) -> Self {
        Self {
            kind,
            items: Mutex::new(Vec::new()),
            tags,
            next_id: AtomicU64::new(0),
            fail_deletes: AtomicBool::new(false),
            reject_tag_links: AtomicBool::new(false),
        }
    }

    /// 既存アイテムを直接投入し、タグのリンクも記録する
    pub fn seed(&self, item: ContentItem) {
        for tag in &item.tags {
            self.tags.record_link(self.kind, &item.id, &tag.id);
        }
        self.items.lock().unwrap().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn items(&self) -> Vec<ContentItem> {
        self.items.lock().unwrap().clone()
    }

    /// 補償削除を失敗させる
    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    /// タグ付けを一意制約違反として失敗させる
    pub fn reject_tag_links(&self) {
        self.reject_tag_links.store(true, Ordering::SeqCst);
    }

    fn with_item<T>(
        &self,
        id: &ContentId,
        f: impl FnOnce(&mut ContentItem) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {id}", self.kind)))?;
        f(item)
    }
}

fn text_contains(text: &LocalizedText, needle: &str) -> bool {
    text.primary().to_lowercase().contains(needle)
        || text
            .arabic()
            .is_some_and(|ar| ar.to_lowercase().contains(needle))
}

fn matches_search(item: &ContentItem, search: Option<&str>) -> bool {
    let Some(search) = search else {
        return true;
    };
    let needle = search.to_lowercase();
    text_contains(&item.title, &needle)
        || text_contains(&item.description, &needle)
        || text_contains(&item.summary, &needle)
}

fn compare(a: &ContentItem, b: &ContentItem, field: SortField) -> CmpOrdering {
    match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::Title => a.title.primary().cmp(b.title.primary()),
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepo {
    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        if item.kind != self.kind {
            return Err(DomainError::Validation(format!(
                "cannot store {} in {} repository",
                item.kind, self.kind
            )));
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = ContentItem {
            id: ContentId::new(format!("{}-{n}", self.kind))?,
            kind: item.kind,
            title: item.title,
            description: item.description,
            summary: item.summary,
            status: item.status,
            author_id: item.author_id,
            category_id: item.category_id,
            closing_date: item.closing_date,
            tags: Vec::new(),
            files: Vec::new(),
            featured_media: None,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &ContentId) -> DomainResult<Option<ContentItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|item| &item.id == id)
            .cloned())
    }

    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<ContentItem>> {
        let mut matching: Vec<ContentItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| filter.status.is_none_or(|status| item.status == status))
            .filter(|item| filter.tag_id.as_ref().is_none_or(|tag| item.has_tag(tag)))
            .filter(|item| matches_search(item, filter.page.search()))
            .cloned()
            .collect();

        let field = filter.page.sort_field();
        matching.sort_by(|a, b| {
            let ordering = compare(a, b, field);
            let ordering = match filter.page.sort_direction() {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        Ok(Page::paginate(matching, &filter.page))
    }

    async fn list_published(&self) -> DomainResult<Vec<ContentItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| item.status == ContentStatus::Published)
            .cloned()
            .collect())
    }

    async fn attach_tags(&self, id: &ContentId, tags: &[TagId]) -> DomainResult<()> {
        if self.reject_tag_links.load(Ordering::SeqCst) {
            return Err(DomainError::Conflict("content_tags_pkey".into()));
        }
        let mut resolved = Vec::with_capacity(tags.len());
        for tag_id in tags {
            let tag = self
                .tags
                .get(tag_id)
                .ok_or_else(|| DomainError::NotFound(format!("tag {tag_id}")))?;
            resolved.push(tag);
        }

        self.with_item(id, |item| {
            for tag in &resolved {
                if item.has_tag(&tag.id) {
                    return Err(DomainError::Conflict("content_tags_pkey".into()));
                }
                item.tags.push(tag.clone());
            }
            Ok(())
        })?;

        for tag in &resolved {
            self.tags.record_link(self.kind, id, &tag.id);
        }
        Ok(())
    }

    async fn set_featured_media(&self, id: &ContentId, file: &FileDescriptor) -> DomainResult<()> {
        self.with_item(id, |item| {
            item.featured_media = Some(file.clone());
            Ok(())
        })
    }

    async fn attach_file(&self, id: &ContentId, file: &FileDescriptor) -> DomainResult<()> {
        self.with_item(id, |item| {
            item.files.push(file.clone());
            Ok(())
        })
    }

    async fn set_status(
        &self,
        id: &ContentId,
        status: ContentStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<ContentItem> {
        self.with_item(id, |item| {
            item.status = status;
            item.updated_at = updated_at;
            Ok(item.clone())
        })
    }

    async fn delete(&self, id: &ContentId) -> DomainResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("delete failed".into()));
        }
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return Err(DomainError::NotFound(format!("{} {id}", self.kind)));
        }
        self.tags.forget_links(id);
        Ok(())
    }
}
