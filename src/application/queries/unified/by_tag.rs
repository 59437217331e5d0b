use super::UnifiedContentService;
use crate::{
    application::{
        dto::{ContentDto, Localize, PaginatedDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentFilter, ContentItem, ContentKind, ContentStatus},
        locale::Language,
        pagination::{Page, PageRequest},
        tag::TagId,
    },
};

pub struct ContentByTagQuery {
    pub tag_id: String,
    pub content_type: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UnifiedContentService {
    /// Published items of one kind carrying the given tag.
    ///
    /// Articles filter in the repository query. Tenders and announcements
    /// have no repository-side tag filter, so every published item is loaded
    /// and filtered here.
    pub async fn content_by_tag(
        &self,
        query: ContentByTagQuery,
        language: Language,
    ) -> ApplicationResult<PaginatedDto<ContentDto>> {
        let tag_id =
            TagId::new(query.tag_id).map_err(|_| ApplicationError::validation("tagId is required"))?;
        let kind: ContentKind = query.content_type.parse().map_err(|_| {
            ApplicationError::validation(format!(
                "unsupported content type: {}",
                query.content_type
            ))
        })?;
        let request = PageRequest::new(query.page, query.limit);
        let repo = self.repos.for_kind(kind);

        let page = match kind {
            ContentKind::Article => {
                let filter = ContentFilter::new(request)
                    .with_status(ContentStatus::Published)
                    .with_tag(tag_id);
                repo.list(&filter).await?
            }
            ContentKind::Tender | ContentKind::Announcement => {
                let matching: Vec<ContentItem> = repo
                    .list_published()
                    .await?
                    .into_iter()
                    .filter(|item| item.is_published() && item.has_tag(&tag_id))
                    .collect();
                Page::paginate(matching, &request)
            }
        };

        let now = self.clock.now();
        Ok(PaginatedDto::from_page(page, |item| item.localize(language, now)))
    }
}
