// src/domain/policy.rs
//! Role based authorization for content operations.
use crate::domain::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateContent,
    PublishContent,
    DeleteOwnContent,
    DeleteAnyContent,
    ManageTags,
    ViewDrafts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

pub fn authorize(role: Role, action: Action) -> Decision {
    use Action as A;
    let allowed = match role {
        Role::Admin => true,
        Role::Editor => matches!(
            action,
            A::CreateContent
                | A::PublishContent
                | A::DeleteOwnContent
                | A::DeleteAnyContent
                | A::ManageTags
                | A::ViewDrafts
        ),
        Role::Author => matches!(
            action,
            A::CreateContent | A::DeleteOwnContent | A::ManageTags | A::ViewDrafts
        ),
        Role::Viewer => false,
    };

    if allowed { Decision::Allow } else { Decision::Deny }
}
