// src/application/commands/tags/reconcile.rs
use super::payload::{TAG_IDS_FIELD, TAGS_FIELD, TagDraft, TagPayload, parse_tag_ids};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::tag::{NewTag, Tag, TagId, TagRepository};
use futures::future::try_join_all;
use std::collections::HashSet;
use std::sync::Arc;

/// Raw `tags` / `tagIds` form values as received from the client.
#[derive(Debug, Clone, Default)]
pub struct TagReconciliationRequest {
    pub tags: Option<String>,
    pub tag_ids: Option<String>,
}

/// Parsed but not yet resolved tag references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagReferences {
    pub existing: Vec<TagId>,
    pub drafts: Vec<TagDraft>,
}

impl TagReferences {
    pub fn parse(request: &TagReconciliationRequest) -> ApplicationResult<Self> {
        let drafts = match request.tags.as_deref() {
            Some(raw) => TagPayload::parse(raw, TAGS_FIELD)?.into_drafts(),
            None => Vec::new(),
        };
        let existing = match request.tag_ids.as_deref() {
            Some(raw) => parse_tag_ids(raw, TAG_IDS_FIELD)?,
            None => Vec::new(),
        };
        Ok(Self { existing, drafts })
    }

    pub fn is_empty(&self) -> bool {
        self.existing.is_empty() && self.drafts.is_empty()
    }
}

/// Resolves tag references into records that are known to exist.
///
/// Every phase runs its lookups concurrently; phases never overlap. The last
/// phase re-reads every tag so that callers only ever link ids the store
/// has confirmed.
pub struct TagReconciler {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagReconciler {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    pub async fn reconcile(&self, request: &TagReconciliationRequest) -> ApplicationResult<Vec<Tag>> {
        let references = TagReferences::parse(request)?;
        self.resolve(references).await
    }

    pub async fn resolve(&self, references: TagReferences) -> ApplicationResult<Vec<Tag>> {
        if references.is_empty() {
            return Ok(Vec::new());
        }

        let existing = self.fetch_all(&references.existing).await?;

        let new_tags = references
            .drafts
            .into_iter()
            .map(validate_draft)
            .collect::<ApplicationResult<Vec<_>>>()?;

        let created = try_join_all(new_tags.into_iter().map(|tag| self.tag_repo.create(tag))).await?;

        let mut seen = HashSet::new();
        let candidates: Vec<TagId> = existing
            .iter()
            .chain(created.iter())
            .filter(|tag| seen.insert(tag.id.clone()))
            .map(|tag| tag.id.clone())
            .collect();

        let verified = self.fetch_all(&candidates).await?;
        tracing::debug!(
            existing = existing.len(),
            created = created.len(),
            verified = verified.len(),
            "tags reconciled"
        );
        Ok(verified)
    }

    async fn fetch_all(&self, ids: &[TagId]) -> ApplicationResult<Vec<Tag>> {
        let lookups = ids.iter().map(|id| async move {
            self.tag_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::reference_not_found(id.as_str()))
        });
        try_join_all(lookups).await
    }
}

fn validate_draft(draft: TagDraft) -> ApplicationResult<NewTag> {
    let name = draft
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApplicationError::validation("tag name is required"))?;
    NewTag::new(name, draft.name_ar).map_err(|err| ApplicationError::validation(err.to_string()))
}
