use super::{ContentCommandService, capability::ensure_allowed};
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto, Localize},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentId, ContentKind, ContentStatus},
        locale::Language,
        policy::Action,
    },
};

pub struct SetPublishStateCommand {
    pub kind: ContentKind,
    pub id: String,
    pub publish: bool,
}

impl ContentCommandService {
    pub async fn set_publish_state(
        &self,
        actor: &AuthenticatedUser,
        command: SetPublishStateCommand,
        language: Language,
    ) -> ApplicationResult<ContentDto> {
        ensure_allowed(actor, Action::PublishContent)?;
        let id = ContentId::new(command.id)?;
        let repo = self.repos.for_kind(command.kind);
        let item = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", command.kind)))?;

        let target = if command.publish {
            ContentStatus::Published
        } else {
            ContentStatus::Draft
        };
        let now = self.clock.now();
        if item.status == target {
            return Ok(item.localize(language, now));
        }

        let updated = repo.set_status(&id, target, now).await?;
        Ok(updated.localize(language, now))
    }
}
