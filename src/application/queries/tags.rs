// src/application/queries/tags.rs
use crate::{
    application::{
        dto::{Localize, PaginatedDto, TagDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        locale::Language,
        pagination::{Page, PageRequest},
        tag::TagRepository,
    },
};
use std::sync::Arc;

pub struct ListTagsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub all: bool,
}

pub struct TagQueryService {
    tag_repo: Arc<dyn TagRepository>,
    clock: Arc<dyn Clock>,
}

impl TagQueryService {
    pub fn new(tag_repo: Arc<dyn TagRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { tag_repo, clock }
    }

    pub async fn list_tags(
        &self,
        query: ListTagsQuery,
        language: Language,
    ) -> ApplicationResult<PaginatedDto<TagDto>> {
        let page = if query.all {
            Page::all(self.tag_repo.list_all().await?)
        } else {
            let request = PageRequest::new(query.page, query.limit).with_search(query.search);
            self.tag_repo.list(&request).await?
        };

        let now = self.clock.now();
        Ok(PaginatedDto::from_page(page, |tag| tag.localize(language, now)))
    }
}
