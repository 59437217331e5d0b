// src/application/queries/unified/aggregate.rs
use super::include::{IncludeKind, resolve_includes};
use crate::{
    application::{
        dto::{Localize, PaginationMeta, UnifiedContentDto, UnifiedItems},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        category::CategoryRepository,
        content::{ContentFilter, ContentRepositories, ContentStatus},
        exchange_rate::ExchangeRateRepository,
        locale::Language,
        pagination::{Page, PageRequest, SortDirection, SortField},
        tag::TagRepository,
    },
};
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct UnifiedContentQuery {
    pub include: Vec<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl UnifiedContentQuery {
    fn page_request(&self) -> PageRequest {
        let field = self
            .sort_by
            .as_deref()
            .and_then(SortField::parse)
            .unwrap_or_default();
        let direction = self
            .sort_order
            .as_deref()
            .and_then(SortDirection::parse)
            .unwrap_or_default();
        PageRequest::new(self.page, self.limit).with_sort(field, direction)
    }
}

/// Fans out one query per requested kind and merges the results.
pub struct UnifiedContentService {
    pub(super) repos: ContentRepositories,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) exchange_rate_repo: Arc<dyn ExchangeRateRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

type Section = (&'static str, UnifiedItems, PaginationMeta);

impl UnifiedContentService {
    pub fn new(
        repos: ContentRepositories,
        tag_repo: Arc<dyn TagRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        exchange_rate_repo: Arc<dyn ExchangeRateRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repos,
            tag_repo,
            category_repo,
            exchange_rate_repo,
            clock,
        }
    }

    /// All fetches run concurrently; the first failure fails the whole call.
    pub async fn unified_content(
        &self,
        query: UnifiedContentQuery,
        language: Language,
    ) -> ApplicationResult<UnifiedContentDto> {
        let request = query.page_request();
        let kinds = resolve_includes(&query.include);
        let now = self.clock.now();

        let sections =
            try_join_all(kinds.into_iter().map(|kind| self.fetch(kind, &request, language, now)))
                .await?;

        let mut result = UnifiedContentDto::default();
        for (key, items, meta) in sections {
            result.insert(key, items, meta);
        }
        Ok(result)
    }

    async fn fetch(
        &self,
        kind: IncludeKind,
        request: &PageRequest,
        language: Language,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Section> {
        let key = kind.key();
        let section = match kind {
            IncludeKind::Content(content_kind) => {
                let filter = ContentFilter::new(request.clone()).with_status(ContentStatus::Published);
                let page = self.repos.for_kind(content_kind).list(&filter).await?;
                let meta = PaginationMeta::from(&page);
                (key, UnifiedItems::Content(page.items.localize(language, now)), meta)
            }
            IncludeKind::Tags => {
                let page = self.tag_repo.list(request).await?;
                let meta = PaginationMeta::from(&page);
                (key, UnifiedItems::Tags(page.items.localize(language, now)), meta)
            }
            IncludeKind::KindTags(content_kind) => {
                let page = Page::all(self.tag_repo.list_for_kind(content_kind).await?);
                let meta = PaginationMeta::from(&page);
                (key, UnifiedItems::Tags(page.items.localize(language, now)), meta)
            }
            IncludeKind::Categories => {
                let page = Page::all(self.category_repo.list_all().await?);
                let meta = PaginationMeta::from(&page);
                (key, UnifiedItems::Categories(page.items.localize(language, now)), meta)
            }
            IncludeKind::ExchangeRates => {
                let page = Page::all(self.exchange_rate_repo.list_all().await?);
                let meta = PaginationMeta::from(&page);
                (key, UnifiedItems::ExchangeRates(page.items.localize(language, now)), meta)
            }
        };
        Ok(section)
    }
}
