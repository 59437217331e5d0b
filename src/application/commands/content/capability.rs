// src/application/commands/content/capability.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::policy::Action,
};

pub fn ensure_allowed(actor: &AuthenticatedUser, action: Action) -> ApplicationResult<()> {
    if actor.can(action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "role {} may not perform {action:?}",
            actor.role
        )))
    }
}
