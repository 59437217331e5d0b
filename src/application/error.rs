// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("malformed input in field `{field}`: {reason}")]
    MalformedInput { field: String, reason: String },

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("referenced record not found: {0}")]
    ReferenceNotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("duplicate tag: {0}")]
    DuplicateTag(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("content creation failed: {0}")]
    CreationFailed(Box<ApplicationError>),

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn reference_not_found(id: impl Into<String>) -> Self {
        Self::ReferenceNotFound(id.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn duplicate_tag(msg: impl Into<String>) -> Self {
        Self::DuplicateTag(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn creation_failed(cause: ApplicationError) -> Self {
        Self::CreationFailed(Box::new(cause))
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Innermost error behind any `CreationFailed` wrapping.
    pub fn root_cause(&self) -> &ApplicationError {
        match self {
            ApplicationError::CreationFailed(inner) => inner.root_cause(),
            other => other,
        }
    }
}
