// tests/support/mocks/tag_repo.rs
use async_trait::async_trait;
use content_hub::domain::content::{ContentId, ContentKind};
use content_hub::domain::errors::{DomainError, DomainResult};
use content_hub::domain::locale::LocalizedText;
use content_hub::domain::pagination::{Page, PageRequest};
use content_hub::domain::tag::{NewTag, Tag, TagId, TagRepository};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// インメモリのタグストア。作成は名前（英語/アラビア語）で冪等。
#[derive(Default)]
pub struct InMemoryTagRepo {
    tags: Mutex<Vec<Tag>>,
    links: Mutex<Vec<(ContentKind, ContentId, TagId)>>,
    next_id: AtomicU64,
    forget_created: AtomicBool,
    fail_lookups: AtomicBool,
    lookups: AtomicUsize,
}

impl InMemoryTagRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存タグを直接投入する
    pub fn seed(&self, id: &str, name: &str, name_ar: Option<&str>) -> Tag {
        let tag = Tag {
            id: TagId::new(id).expect("tag id"),
            name: LocalizedText::new(name, name_ar.map(str::to_string)),
            created_at: None,
            updated_at: None,
        };
        self.tags.lock().unwrap().push(tag.clone());
        tag
    }

    pub fn len(&self) -> usize {
        self.tags.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// 作成したタグを保存しない（並行削除のシミュレーション）
    pub fn forget_created_tags(&self) {
        self.forget_created.store(true, Ordering::SeqCst);
    }

    /// `find_by_id` を永続化エラーにする
    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    pub fn record_link(&self, kind: ContentKind, content_id: &ContentId, tag_id: &TagId) {
        self.links
            .lock()
            .unwrap()
            .push((kind, content_id.clone(), tag_id.clone()));
    }

    pub fn forget_links(&self, content_id: &ContentId) {
        self.links
            .lock()
            .unwrap()
            .retain(|(_, linked, _)| linked != content_id);
    }

    pub fn get(&self, id: &TagId) -> Option<Tag> {
        self.tags
            .lock()
            .unwrap()
            .iter()
            .find(|tag| &tag.id == id)
            .cloned()
    }
}

fn contains_ci(text: &LocalizedText, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    text.primary().to_lowercase().contains(&needle)
        || text
            .arabic()
            .is_some_and(|ar| ar.to_lowercase().contains(&needle))
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn find_by_id(&self, id: &TagId) -> DomainResult<Option<Tag>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("tag store unavailable".into()));
        }
        Ok(self.get(id))
    }

    async fn create(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut tags = self.tags.lock().unwrap();
        if let Some(existing) = tags.iter().find(|existing| tag.collides_with(existing)) {
            return Ok(existing.clone());
        }

        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Tag {
            id: TagId::new(format!("tag-{n}"))?,
            name: tag.name,
            created_at: Some(super::time::fixed_now()),
            updated_at: Some(super::time::fixed_now()),
        };
        if !self.forget_created.load(Ordering::SeqCst) {
            tags.push(created.clone());
        }
        Ok(created)
    }

    async fn list(&self, request: &PageRequest) -> DomainResult<Page<Tag>> {
        let mut matching: Vec<Tag> = self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|tag| request.search().is_none_or(|s| contains_ci(&tag.name, s)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.primary().cmp(b.name.primary()));
        Ok(Page::paginate(matching, request))
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let mut tags = self.tags.lock().unwrap().clone();
        tags.sort_by(|a, b| a.name.primary().cmp(b.name.primary()));
        Ok(tags)
    }

    async fn list_for_kind(&self, kind: ContentKind) -> DomainResult<Vec<Tag>> {
        let linked: Vec<TagId> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .map(|(_, _, tag_id)| tag_id.clone())
            .collect();
        let mut tags: Vec<Tag> = self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|tag| linked.contains(&tag.id))
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.primary().cmp(b.name.primary()));
        Ok(tags)
    }
}
