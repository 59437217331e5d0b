use super::TagCommandService;
use crate::{
    application::{
        commands::content::ensure_allowed,
        dto::{AuthenticatedUser, Localize, TagDto},
        error::ApplicationResult,
    },
    domain::{locale::Language, policy::Action, tag::NewTag},
};

pub struct CreateTagCommand {
    pub name: String,
    pub name_ar: Option<String>,
}

impl TagCommandService {
    /// Returns the existing tag when the name is already taken.
    pub async fn create_tag(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTagCommand,
        language: Language,
    ) -> ApplicationResult<TagDto> {
        ensure_allowed(actor, Action::ManageTags)?;

        let new_tag = NewTag::new(command.name, command.name_ar)?;
        let tag = self.tag_repo.create(new_tag).await?;
        tracing::info!(tag_id = %tag.id, "tag created or reused");
        Ok(tag.localize(language, self.clock.now()))
    }
}
