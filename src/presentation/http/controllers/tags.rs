// src/presentation/http/controllers/tags.rs
use crate::application::{
    commands::tags::CreateTagCommand,
    dto::{PaginatedDto, TagDto},
    queries::tags::ListTagsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AcceptLanguage, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TagListParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub search: Option<String>,
    /// Return every tag in one page.
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub name: String,
    #[serde(default, alias = "name_ar")]
    pub name_ar: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    params(
        TagListParams,
        ("Accept-Language" = Option<String>, Header, description = "`ar` selects Arabic names")
    ),
    responses(
        (status = 200, description = "Paginated tags.", body = PaginatedDto<TagDto>)
    ),
    tag = "Tags"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    AcceptLanguage(language): AcceptLanguage,
    Query(params): Query<TagListParams>,
) -> HttpResult<Json<PaginatedDto<TagDto>>> {
    let query = ListTagsQuery {
        page: params.page,
        limit: params.limit,
        search: params.search,
        all: params.all,
    };
    state
        .services
        .tag_queries
        .list_tags(query, language)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created, or the existing tag with that name.", body = TagDto),
        (status = 400, description = "Missing name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not allowed to manage tags.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Tags"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    AcceptLanguage(language): AcceptLanguage,
    Json(payload): Json<CreateTagRequest>,
) -> HttpResult<(StatusCode, Json<TagDto>)> {
    let command = CreateTagCommand {
        name: payload.name,
        name_ar: payload.name_ar,
    };
    let tag = state
        .services
        .tag_commands
        .create_tag(&user, command, language)
        .await
        .into_http_write()?;
    Ok((StatusCode::CREATED, Json(tag)))
}
