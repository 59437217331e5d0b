// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::content::list_content,
        crate::presentation::http::controllers::content::get_content,
        crate::presentation::http::controllers::content::create_content,
        crate::presentation::http::controllers::content::delete_content,
        crate::presentation::http::controllers::content::set_publish_state,
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::tags::create_tag,
        crate::presentation::http::controllers::catalog::list_categories,
        crate::presentation::http::controllers::catalog::list_exchange_rates,
        crate::presentation::http::controllers::unified::unified_content,
        crate::presentation::http::controllers::unified::content_by_tag
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::content::PublishRequest,
            crate::presentation::http::controllers::content::CreateContentForm,
            crate::presentation::http::controllers::tags::CreateTagRequest,
            crate::application::dto::ContentDto,
            crate::application::dto::TagDto,
            crate::application::dto::FileDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::ExchangeRateDto,
            crate::application::dto::PaginationMeta,
            crate::application::dto::UnifiedItems,
            crate::application::dto::UnifiedContentDto
        )
    ),
    tags(
        (name = "Content", description = "Articles, tenders, announcements and the unified feed"),
        (name = "Tags", description = "Tag listing and creation"),
        (name = "Catalog", description = "Categories and exchange rates"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Content Hub API",
        description = "Bilingual (English/Arabic) content backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://127.0.0.1:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
