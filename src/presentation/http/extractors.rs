// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::locale::Language,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::convert::Infallible;

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

/// Response language taken from the first `Accept-Language` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptLanguage(pub Language);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| HttpError::from_error(ApplicationError::upstream("application state missing")))?;
    Ok(app_state)
}

async fn authenticate(state: &HttpState, token: &str) -> Result<AuthenticatedUser, HttpError> {
    state
        .services
        .token_manager()
        .authenticate(token)
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let user = authenticate(&app_state, header.token()).await?;
        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => Ok(Self(Some(authenticate(&app_state, header.token()).await?))),
            None => Ok(Self(None)),
        }
    }
}

pub(crate) fn first_language_range(header: &str) -> &str {
    header
        .split([',', ';'])
        .next()
        .unwrap_or_default()
        .trim()
}

impl<S> FromRequestParts<S> for AcceptLanguage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let language = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(|value| Language::from_code(first_language_range(value)))
            .unwrap_or_default();
        Ok(Self(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_range_is_used() {
        assert_eq!(first_language_range("ar, en;q=0.8"), "ar");
        assert_eq!(first_language_range(" ar;q=0.9"), "ar");
        assert_eq!(first_language_range("en-US,ar"), "en-US");
        assert_eq!(first_language_range(""), "");
    }

    #[test]
    fn only_exact_ar_selects_arabic() {
        assert_eq!(Language::from_code(first_language_range("ar-EG,ar")), Language::En);
        assert_eq!(Language::from_code(first_language_range("ar")), Language::Ar);
    }
}
