// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const DUPLICATE_TAG_MESSAGE: &str = "one of the tags is already attached to this content";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    /// Mapping for read endpoints: unexpected failures are 500.
    pub fn from_error(err: ApplicationError) -> Self {
        Self::map(err, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Mapping for write endpoints: unexpected failures are 400.
    pub fn from_write_error(err: ApplicationError) -> Self {
        Self::map(err, StatusCode::BAD_REQUEST)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn map(err: ApplicationError, upstream_status: StatusCode) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            err @ ApplicationError::MalformedInput { .. } => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            err @ ApplicationError::ReferenceNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, err.to_string())
            }
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::DuplicateTag(_) => {
                Self::new(StatusCode::CONFLICT, DUPLICATE_TAG_MESSAGE.into())
            }
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::CreationFailed(cause) => match cause.root_cause() {
                ApplicationError::DuplicateTag(_) => {
                    Self::new(StatusCode::CONFLICT, DUPLICATE_TAG_MESSAGE.into())
                }
                inner => {
                    tracing::warn!(error = %inner, "content creation failed");
                    Self::new(StatusCode::BAD_REQUEST, inner.to_string())
                }
            },
            ApplicationError::Upstream(msg) => {
                tracing::error!(error = %msg, "upstream failure");
                Self::new(upstream_status, msg)
            }
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
                DomainError::Persistence(msg) => {
                    tracing::error!(error = %msg, "persistence failure");
                    Self::new(upstream_status, msg)
                }
            },
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
    fn into_http_write(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }

    fn into_http_write(self) -> HttpResult<T> {
        self.map_err(HttpError::from_write_error)
    }
}
