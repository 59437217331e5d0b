// src/domain/exchange_rate.rs
use crate::domain::errors::DomainResult;
use crate::domain::locale::LocalizedText;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub id: String,
    pub currency_code: String,
    pub currency_name: LocalizedText,
    pub buy_rate: f64,
    pub sell_rate: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait ExchangeRateRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<ExchangeRate>>;
}
