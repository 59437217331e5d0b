// src/presentation/http/routes.rs
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{catalog, content, tags, unified},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Deployment-specific router settings.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// Directory served under `/uploads`; `None` disables static serving.
    pub upload_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            upload_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(parsed))
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/tags",
            get(tags::list_tags).post(tags::create_tag),
        )
        .route("/api/v1/categories", get(catalog::list_categories))
        .route("/api/v1/exchange-rates", get(catalog::list_exchange_rates))
        .route("/api/v1/content", get(unified::unified_content))
        .route("/api/v1/content/by-tag", get(unified::content_by_tag))
        .route(
            "/api/v1/{kind}",
            get(content::list_content).post(content::create_content),
        )
        .route(
            "/api/v1/{kind}/{id}",
            get(content::get_content).delete(content::delete_content),
        )
        .route(
            "/api/v1/{kind}/{id}/publish",
            post(content::set_publish_state),
        );

    if let Some(dir) = options.upload_dir {
        router = router.nest_service("/uploads", ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(options.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
