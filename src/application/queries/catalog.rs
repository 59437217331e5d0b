// src/application/queries/catalog.rs
//! Read-only reference data: categories and exchange rates.
use crate::{
    application::{
        dto::{CategoryDto, ExchangeRateDto, Localize, PaginatedDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        category::CategoryRepository, exchange_rate::ExchangeRateRepository, locale::Language,
        pagination::Page,
    },
};
use std::sync::Arc;

pub struct CatalogQueryService {
    category_repo: Arc<dyn CategoryRepository>,
    exchange_rate_repo: Arc<dyn ExchangeRateRepository>,
    clock: Arc<dyn Clock>,
}

impl CatalogQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        exchange_rate_repo: Arc<dyn ExchangeRateRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            exchange_rate_repo,
            clock,
        }
    }

    pub async fn list_categories(
        &self,
        language: Language,
    ) -> ApplicationResult<PaginatedDto<CategoryDto>> {
        let page = Page::all(self.category_repo.list_all().await?);
        let now = self.clock.now();
        Ok(PaginatedDto::from_page(page, |c| c.localize(language, now)))
    }

    pub async fn list_exchange_rates(
        &self,
        language: Language,
    ) -> ApplicationResult<PaginatedDto<ExchangeRateDto>> {
        let page = Page::all(self.exchange_rate_repo.list_all().await?);
        let now = self.clock.now();
        Ok(PaginatedDto::from_page(page, |r| r.localize(language, now)))
    }
}
