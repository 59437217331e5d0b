use super::ContentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto, Localize},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentId, ContentKind},
        locale::Language,
        policy::Action,
    },
};

pub struct GetContentQuery {
    pub kind: ContentKind,
    pub id: String,
}

impl ContentQueryService {
    pub async fn get_content(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetContentQuery,
        language: Language,
    ) -> ApplicationResult<ContentDto> {
        let id = ContentId::new(query.id)?;
        let not_found = || ApplicationError::not_found(format!("{} not found", query.kind));

        let item = self
            .repos
            .for_kind(query.kind)
            .find_by_id(&id)
            .await?
            .ok_or_else(not_found)?;

        // Unpublished items are hidden, not forbidden.
        let visible = item.is_published() || actor.is_some_and(|user| user.can(Action::ViewDrafts));
        if !visible {
            return Err(not_found());
        }

        Ok(item.localize(language, self.clock.now()))
    }
}
