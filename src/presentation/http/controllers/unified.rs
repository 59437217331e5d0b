// src/presentation/http/controllers/unified.rs
use crate::application::{
    dto::{ContentDto, PaginatedDto, UnifiedContentDto},
    queries::unified::{ContentByTagQuery, UnifiedContentQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AcceptLanguage;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedContentParams {
    /// Comma separated keys, e.g. `articles,tags,exchangeRates`. Unknown keys are ignored.
    #[serde(default)]
    pub include: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    /// `createdAt`, `updatedAt` or `title`.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    #[serde(default)]
    pub sort_order: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ContentByTagParams {
    pub tag_id: String,
    /// `articles`, `tenders` or `announcements`.
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

fn split_includes(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

#[utoipa::path(
    get,
    path = "/api/v1/content",
    params(
        UnifiedContentParams,
        ("Accept-Language" = Option<String>, Header, description = "`ar` selects Arabic text")
    ),
    responses(
        (status = 200, description = "Requested collections keyed by inclusion key.", body = UnifiedContentDto)
    ),
    tag = "Content"
)]
pub async fn unified_content(
    Extension(state): Extension<HttpState>,
    AcceptLanguage(language): AcceptLanguage,
    Query(params): Query<UnifiedContentParams>,
) -> HttpResult<Json<UnifiedContentDto>> {
    let query = UnifiedContentQuery {
        include: split_includes(params.include.as_deref()),
        page: params.page,
        limit: params.limit,
        sort_by: params.sort_by,
        sort_order: params.sort_order,
    };
    state
        .services
        .unified_content
        .unified_content(query, language)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/content/by-tag",
    params(
        ContentByTagParams,
        ("Accept-Language" = Option<String>, Header, description = "`ar` selects Arabic text")
    ),
    responses(
        (status = 200, description = "Published items of one kind carrying the tag.", body = PaginatedDto<ContentDto>),
        (status = 400, description = "Unsupported type.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn content_by_tag(
    Extension(state): Extension<HttpState>,
    AcceptLanguage(language): AcceptLanguage,
    Query(params): Query<ContentByTagParams>,
) -> HttpResult<Json<PaginatedDto<ContentDto>>> {
    let query = ContentByTagQuery {
        tag_id: params.tag_id,
        content_type: params.content_type,
        page: params.page,
        limit: params.limit,
    };
    state
        .services
        .unified_content
        .content_by_tag(query, language)
        .await
        .into_http()
        .map(Json)
}
