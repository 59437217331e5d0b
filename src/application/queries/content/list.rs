use super::ContentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto, Localize, PaginatedDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentFilter, ContentKind, ContentStatus},
        locale::Language,
        pagination::PageRequest,
        policy::Action,
    },
};

pub struct ListContentQuery {
    pub kind: ContentKind,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ContentQueryService {
    pub async fn list_content(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListContentQuery,
        language: Language,
    ) -> ApplicationResult<PaginatedDto<ContentDto>> {
        let request = PageRequest::new(query.page, query.limit).with_search(query.search);
        let status = resolve_status_filter(actor, query.status.as_deref())?;

        let mut filter = ContentFilter::new(request);
        filter.status = status;

        let page = self.repos.for_kind(query.kind).list(&filter).await?;
        let now = self.clock.now();
        Ok(PaginatedDto::from_page(page, |item| {
            item.localize(language, now)
        }))
    }
}

/// Anonymous callers and roles without draft access only see published
/// items; asking for any other status requires draft access.
fn resolve_status_filter(
    actor: Option<&AuthenticatedUser>,
    requested: Option<&str>,
) -> ApplicationResult<Option<ContentStatus>> {
    let can_view_drafts = actor.is_some_and(|user| user.can(Action::ViewDrafts));
    let requested = requested
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<ContentStatus>)
        .transpose()?;

    match requested {
        Some(ContentStatus::Published) => Ok(Some(ContentStatus::Published)),
        Some(other) if can_view_drafts => Ok(Some(other)),
        Some(other) => Err(ApplicationError::forbidden(format!(
            "listing {other} content requires draft access"
        ))),
        None if can_view_drafts => Ok(None),
        None => Ok(Some(ContentStatus::Published)),
    }
}
