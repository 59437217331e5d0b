use super::localize::Localize;
use crate::domain::category::Category;
use crate::domain::exchange_rate::ExchangeRate;
use crate::domain::locale::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Localize for Category {
    type Output = CategoryDto;

    fn localize(&self, language: Language, now: DateTime<Utc>) -> CategoryDto {
        CategoryDto {
            id: self.id.as_str().to_string(),
            name: self.name.pick(language).to_string(),
            description: self
                .description
                .as_ref()
                .map(|text| text.pick(language).to_string()),
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateDto {
    pub id: String,
    pub currency_code: String,
    pub currency_name: String,
    pub buy_rate: f64,
    pub sell_rate: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Localize for ExchangeRate {
    type Output = ExchangeRateDto;

    fn localize(&self, language: Language, now: DateTime<Utc>) -> ExchangeRateDto {
        ExchangeRateDto {
            id: self.id.clone(),
            currency_code: self.currency_code.clone(),
            currency_name: self.currency_name.pick(language).to_string(),
            buy_rate: self.buy_rate,
            sell_rate: self.sell_rate,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }
}
