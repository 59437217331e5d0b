use super::{CategoryDto, ContentDto, ExchangeRateDto, PaginationMeta, TagDto};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Serialized as a bare array; the key in `UnifiedContentDto` identifies the variant.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum UnifiedItems {
    Content(Vec<ContentDto>),
    Tags(Vec<TagDto>),
    Categories(Vec<CategoryDto>),
    ExchangeRates(Vec<ExchangeRateDto>),
}

impl UnifiedItems {
    pub fn len(&self) -> usize {
        match self {
            UnifiedItems::Content(items) => items.len(),
            UnifiedItems::Tags(items) => items.len(),
            UnifiedItems::Categories(items) => items.len(),
            UnifiedItems::ExchangeRates(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct UnifiedContentDto {
    pub items: BTreeMap<String, UnifiedItems>,
    pub metadata: BTreeMap<String, PaginationMeta>,
}

impl UnifiedContentDto {
    pub fn insert(&mut self, key: &str, items: UnifiedItems, meta: PaginationMeta) {
        self.items.insert(key.to_string(), items);
        self.metadata.insert(key.to_string(), meta);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}
