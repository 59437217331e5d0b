// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use content_hub::domain::category::{Category, CategoryId, CategoryRepository};
use content_hub::domain::errors::{DomainError, DomainResult};
use content_hub::domain::exchange_rate::{ExchangeRate, ExchangeRateRepository};
use content_hub::domain::locale::LocalizedText;

/// 固定のカテゴリ一覧
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    categories: Vec<Category>,
}

impl InMemoryCategoryRepo {
    pub fn seeded() -> Self {
        let category = |id: &str, name: &str, name_ar: &str| Category {
            id: CategoryId(id.into()),
            name: LocalizedText::new(name, Some(name_ar.into())),
            description: None,
            created_at: None,
            updated_at: None,
        };
        Self {
            categories: vec![
                category("cat-1", "Economy", "اقتصاد"),
                category("cat-2", "Procurement", "مشتريات"),
            ],
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

/// 常に永続化エラーを返すカテゴリリポジトリ
#[derive(Default)]
pub struct FailingCategoryRepo;

#[async_trait]
impl CategoryRepository for FailingCategoryRepo {
    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        Err(DomainError::Persistence("categories table unavailable".into()))
    }
}

/// 固定の為替レート一覧
#[derive(Default)]
pub struct InMemoryExchangeRateRepo {
    rates: Vec<ExchangeRate>,
}

impl InMemoryExchangeRateRepo {
    pub fn seeded() -> Self {
        Self {
            rates: vec![ExchangeRate {
                id: "rate-usd".into(),
                currency_code: "USD".into(),
                currency_name: LocalizedText::new("US Dollar", Some("دولار أمريكي".into())),
                buy_rate: 1.27,
                sell_rate: 1.31,
                created_at: None,
                updated_at: None,
            }],
        }
    }
}

#[async_trait]
impl ExchangeRateRepository for InMemoryExchangeRateRepo {
    async fn list_all(&self) -> DomainResult<Vec<ExchangeRate>> {
        Ok(self.rates.clone())
    }
}
