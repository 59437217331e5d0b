// src/presentation/http/controllers/content.rs
use crate::application::{
    commands::content::{
        CreateContentCommand, DeleteContentCommand, SetPublishStateCommand, UploadField,
    },
    dto::{ContentDto, PaginatedDto},
    error::ApplicationError,
    ports::storage::UploadedFile,
    queries::content::{GetContentQuery, ListContentQuery},
};
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{AcceptLanguage, Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query, multipart::Field},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ContentListParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub search: Option<String>,
    /// `draft`, `published` or `archived`. Non-published statuses need draft access.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

/// Multipart body accepted by the create endpoints. Documentation only.
#[allow(dead_code)]
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateContentForm {
    pub title: String,
    pub title_ar: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub summary: Option<String>,
    pub summary_ar: Option<String>,
    pub status: Option<String>,
    pub category_id: Option<String>,
    pub closing_date: Option<String>,
    /// JSON array of `{name, nameAr}` objects or names; brackets may be omitted.
    pub tags: Option<String>,
    /// JSON array or comma separated list of existing tag ids.
    pub tag_ids: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub featured_media: Option<Vec<u8>>,
    #[schema(value_type = Vec<String>, format = Binary)]
    pub images: Vec<Vec<u8>>,
    #[schema(value_type = Vec<String>, format = Binary)]
    pub videos: Vec<Vec<u8>>,
}

/// Resolves the `{kind}` path segment; only plural collection names match.
fn content_kind(segment: &str) -> HttpResult<ContentKind> {
    ContentKind::ALL
        .into_iter()
        .find(|kind| kind.plural() == segment)
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::not_found(format!(
                "unknown content collection: {segment}"
            )))
        })
}

#[utoipa::path(
    get,
    path = "/api/v1/{kind}",
    params(
        ("kind" = String, Path, description = "articles, tenders or announcements"),
        ContentListParams,
        ("Accept-Language" = Option<String>, Header, description = "`ar` selects Arabic text")
    ),
    responses(
        (status = 200, description = "Paginated content items.", body = PaginatedDto<ContentDto>),
        (status = 403, description = "Status filter requires draft access.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn list_content(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    AcceptLanguage(language): AcceptLanguage,
    Path(kind): Path<String>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<PaginatedDto<ContentDto>>> {
    let kind = content_kind(&kind)?;
    let query = ListContentQuery {
        kind,
        page: params.page,
        limit: params.limit,
        search: params.search,
        status: params.status,
    };

    state
        .services
        .content_queries
        .list_content(actor.0.as_ref(), query, language)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "articles, tenders or announcements"),
        ("id" = String, Path, description = "Content identifier"),
        ("Accept-Language" = Option<String>, Header, description = "`ar` selects Arabic text")
    ),
    responses(
        (status = 200, description = "Content item.", body = ContentDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn get_content(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    AcceptLanguage(language): AcceptLanguage,
    Path((kind, id)): Path<(String, String)>,
) -> HttpResult<Json<ContentDto>> {
    let kind = content_kind(&kind)?;
    state
        .services
        .content_queries
        .get_content(actor.0.as_ref(), GetContentQuery { kind, id }, language)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/{kind}",
    params(
        ("kind" = String, Path, description = "articles, tenders or announcements"),
        ("Accept-Language" = Option<String>, Header, description = "`ar` selects Arabic text")
    ),
    request_body(content = CreateContentForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Content created with tags and media.", body = ContentDto),
        (status = 400, description = "Invalid input or failed creation step.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Referenced tag not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Duplicate tag link.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn create_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    AcceptLanguage(language): AcceptLanguage,
    Path(kind): Path<String>,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let kind = content_kind(&kind)?;
    let command = read_content_form(kind, multipart)
        .await
        .into_http_write()?;

    let created = state
        .services
        .content_commands
        .create_content(&user, command, language)
        .await
        .into_http_write()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "articles, tenders or announcements"),
        ("id" = String, Path, description = "Content identifier")
    ),
    responses(
        (status = 204, description = "Deleted."),
        (status = 403, description = "Not allowed to delete.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn delete_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((kind, id)): Path<(String, String)>,
) -> HttpResult<StatusCode> {
    let kind = content_kind(&kind)?;
    state
        .services
        .content_commands
        .delete_content(&user, DeleteContentCommand { kind, id })
        .await
        .into_http_write()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/{kind}/{id}/publish",
    params(
        ("kind" = String, Path, description = "articles, tenders or announcements"),
        ("id" = String, Path, description = "Content identifier")
    ),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Updated content item.", body = ContentDto),
        (status = 403, description = "Not allowed to publish.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Content"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    AcceptLanguage(language): AcceptLanguage,
    Path((kind, id)): Path<(String, String)>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ContentDto>> {
    let kind = content_kind(&kind)?;
    let command = SetPublishStateCommand {
        kind,
        id,
        publish: payload.publish,
    };
    state
        .services
        .content_commands
        .set_publish_state(&user, command, language)
        .await
        .into_http_write()
        .map(Json)
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApplicationError {
    ApplicationError::validation(format!("invalid multipart body: {}", err.body_text()))
}

/// A part counts as a file when it carries a filename.
async fn upload_field(field: Field<'_>) -> Result<UploadField, ApplicationError> {
    match field.file_name().map(str::to_string) {
        Some(file_name) => {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(multipart_error)?;
            Ok(UploadField::File(UploadedFile::new(file_name, content_type, bytes)))
        }
        None => Ok(UploadField::Text(field.text().await.map_err(multipart_error)?)),
    }
}

async fn read_content_form(
    kind: ContentKind,
    mut multipart: Multipart,
) -> Result<CreateContentCommand, ApplicationError> {
    let mut command = CreateContentCommand::builder(kind).build();
    let mut tag_parts = Vec::new();
    let mut tag_id_parts = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "featuredMedia" | "featured_media" => {
                command.featured_media = Some(upload_field(field).await?);
            }
            "images" | "images[]" => command.images.push(upload_field(field).await?),
            "videos" | "videos[]" => command.videos.push(upload_field(field).await?),
            "title" => command.title = field.text().await.map_err(multipart_error)?,
            "tags" | "tags[]" => tag_parts.push(field.text().await.map_err(multipart_error)?),
            "tagIds" | "tagIds[]" | "tag_ids" | "tag_ids[]" => {
                tag_id_parts.push(field.text().await.map_err(multipart_error)?)
            }
            _ => {
                let slot = match name.as_str() {
                    "titleAr" | "title_ar" => &mut command.title_ar,
                    "description" => &mut command.description,
                    "descriptionAr" | "description_ar" => &mut command.description_ar,
                    "summary" => &mut command.summary,
                    "summaryAr" | "summary_ar" => &mut command.summary_ar,
                    "status" => &mut command.status,
                    "categoryId" | "category_id" => &mut command.category_id,
                    "closingDate" | "closing_date" => &mut command.closing_date,
                    other => {
                        tracing::debug!(field = other, "ignoring unknown form field");
                        continue;
                    }
                };
                *slot = Some(field.text().await.map_err(multipart_error)?);
            }
        }
    }

    command.tags = merge_repeated_parts(tag_parts, false);
    command.tag_ids = merge_repeated_parts(tag_id_parts, true);
    Ok(command)
}

/// Joins repeated list parts into one JSON array. A single part is passed
/// through untouched. Bare comma lists are quoted when `quote_bare` is set.
fn merge_repeated_parts(parts: Vec<String>, quote_bare: bool) -> Option<String> {
    let mut parts: Vec<String> = parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect();
    if parts.len() <= 1 {
        return parts.pop();
    }

    let fragments: Vec<String> = parts
        .iter()
        .map(|part| {
            let part = part.trim();
            match part.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                Some(inner) => inner.trim().to_string(),
                // Unclosed arrays stay malformed.
                None if part.starts_with('[') || !quote_bare => part.to_string(),
                None => part
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(|id| serde_json::Value::from(id).to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            }
        })
        .filter(|fragment| !fragment.is_empty())
        .collect();
    Some(format!("[{}]", fragments.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_tag_id_parts_are_merged() {
        assert_eq!(merge_repeated_parts(vec![], true), None);
        assert_eq!(
            merge_repeated_parts(vec!["T1, T2".into()], true).as_deref(),
            Some("T1, T2")
        );
        assert_eq!(
            merge_repeated_parts(vec!["T1".into(), " ".into(), r#"["T2", 3]"#.into()], true)
                .as_deref(),
            Some(r#"["T1","T2", 3]"#)
        );
        assert_eq!(
            merge_repeated_parts(vec!["T1".into(), r#"["T2""#.into()], true).as_deref(),
            Some(r#"["T1",["T2"]"#)
        );
    }

    #[test]
    fn repeated_tag_payload_parts_are_merged() {
        assert_eq!(
            merge_repeated_parts(
                vec![r#"[{"name":"Legal"}]"#.into(), r#"{"name":"Finance"}"#.into()],
                false
            )
            .as_deref(),
            Some(r#"[{"name":"Legal"},{"name":"Finance"}]"#)
        );
    }

    #[test]
    fn only_plural_collections_resolve() {
        assert_eq!(content_kind("tenders").unwrap(), ContentKind::Tender);
        assert_eq!(content_kind("announcements").unwrap(), ContentKind::Announcement);
        assert_eq!(
            content_kind("article").unwrap_err().status(),
            StatusCode::NOT_FOUND
        );
    }
}
