// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use content_hub::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use content_hub::domain::user::{Role, UserId};

/// テスト用トークン定数（ロールごと）
pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const VIEWER_TOKEN: &str = "viewer-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/// 著者トークンのユーザーID（所有者チェック用）
pub const AUTHOR_ID: i64 = 3;

/* -------------------------------- TokenManager -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("{}-token", subject.role),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let now = super::time::fixed_now();
        match token {
            ADMIN_TOKEN => Ok(user(1, "admin", Role::Admin, now)),
            EDITOR_TOKEN => Ok(user(2, "editor", Role::Editor, now)),
            AUTHOR_TOKEN => Ok(user(AUTHOR_ID, "author", Role::Author, now)),
            VIEWER_TOKEN => Ok(user(4, "viewer", Role::Viewer, now)),
            // 期限切れトークンは認証時に拒否される
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

pub fn user(id: i64, username: &str, role: Role, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        role,
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn editor() -> AuthenticatedUser {
    user(2, "editor", Role::Editor, super::time::fixed_now())
}

pub fn author() -> AuthenticatedUser {
    user(AUTHOR_ID, "author", Role::Author, super::time::fixed_now())
}

pub fn viewer() -> AuthenticatedUser {
    user(4, "viewer", Role::Viewer, super::time::fixed_now())
}
