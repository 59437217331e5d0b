// src/presentation/http/controllers/catalog.rs
use crate::application::dto::{CategoryDto, ExchangeRateDto, PaginatedDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AcceptLanguage;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(("Accept-Language" = Option<String>, Header, description = "`ar` selects Arabic names")),
    responses(
        (status = 200, description = "All categories.", body = PaginatedDto<CategoryDto>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    AcceptLanguage(language): AcceptLanguage,
) -> HttpResult<Json<PaginatedDto<CategoryDto>>> {
    state
        .services
        .catalog_queries
        .list_categories(language)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/exchange-rates",
    params(("Accept-Language" = Option<String>, Header, description = "`ar` selects Arabic names")),
    responses(
        (status = 200, description = "All exchange rates.", body = PaginatedDto<ExchangeRateDto>)
    ),
    tag = "Catalog"
)]
pub async fn list_exchange_rates(
    Extension(state): Extension<HttpState>,
    AcceptLanguage(language): AcceptLanguage,
) -> HttpResult<Json<PaginatedDto<ExchangeRateDto>>> {
    state
        .services
        .catalog_queries
        .list_exchange_rates(language)
        .await
        .into_http()
        .map(Json)
}
