// src/infrastructure/repositories/postgres_catalog.rs
//! Read-only reference data: categories and exchange rates.
use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryRepository};
use crate::domain::errors::DomainResult;
use crate::domain::exchange_rate::{ExchangeRate, ExchangeRateRepository};
use crate::domain::locale::LocalizedText;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    name_ar: Option<String>,
    description: Option<String>,
    description_ar: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: CategoryId(row.id),
            name: LocalizedText::new(row.name, row.name_ar),
            description: row
                .description
                .map(|text| LocalizedText::new(text, row.description_ar)),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const CATEGORY_COLUMNS: &str =
    "id, name, name_ar, description, description_ar, created_at, updated_at";

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY name ASC, id ASC");
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}

#[derive(Clone)]
pub struct PostgresExchangeRateRepository {
    pool: PgPool,
}

impl PostgresExchangeRateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ExchangeRateRow {
    id: String,
    currency_code: String,
    currency_name: String,
    currency_name_ar: Option<String>,
    buy_rate: f64,
    sell_rate: f64,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<ExchangeRateRow> for ExchangeRate {
    fn from(row: ExchangeRateRow) -> Self {
        ExchangeRate {
            id: row.id,
            currency_code: row.currency_code,
            currency_name: LocalizedText::new(row.currency_name, row.currency_name_ar),
            buy_rate: row.buy_rate,
            sell_rate: row.sell_rate,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const EXCHANGE_RATE_COLUMNS: &str = "id, currency_code, currency_name, currency_name_ar, \
     buy_rate, sell_rate, created_at, updated_at";

#[async_trait]
impl ExchangeRateRepository for PostgresExchangeRateRepository {
    async fn list_all(&self) -> DomainResult<Vec<ExchangeRate>> {
        let sql = format!(
            "SELECT {EXCHANGE_RATE_COLUMNS} FROM exchange_rates ORDER BY currency_code ASC"
        );
        let rows = sqlx::query_as::<_, ExchangeRateRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(ExchangeRate::from).collect())
    }
}
