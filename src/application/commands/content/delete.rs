use super::ContentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentId, ContentKind},
        policy::Action,
    },
};

pub struct DeleteContentCommand {
    pub kind: ContentKind,
    pub id: String,
}

impl ContentCommandService {
    pub async fn delete_content(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteContentCommand,
    ) -> ApplicationResult<()> {
        let id = ContentId::new(command.id)?;
        let repo = self.repos.for_kind(command.kind);
        let item = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", command.kind)))?;

        let allowed = actor.can(Action::DeleteAnyContent)
            || (actor.can(Action::DeleteOwnContent) && item.is_authored_by(actor.id));
        if !allowed {
            return Err(ApplicationError::forbidden(format!(
                "insufficient privileges to delete {}",
                command.kind
            )));
        }

        repo.delete(&id).await?;
        tracing::info!(content_id = %id, kind = %command.kind, user_id = %actor.id, "content deleted");
        Ok(())
    }
}
