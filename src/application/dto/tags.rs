use super::localize::Localize;
use crate::domain::locale::Language;
use crate::domain::tag::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Localize for Tag {
    type Output = TagDto;

    fn localize(&self, language: Language, now: DateTime<Utc>) -> TagDto {
        TagDto {
            id: self.id.as_str().to_string(),
            name: self.name.pick(language).to_string(),
            name_ar: self
                .name
                .arabic()
                .filter(|ar| !ar.trim().is_empty())
                .unwrap_or(self.name.primary())
                .to_string(),
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }
}
