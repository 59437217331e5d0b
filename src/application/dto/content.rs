use super::{files::FileDto, localize::Localize, tags::TagDto};
use crate::domain::content::ContentItem;
use crate::domain::locale::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single-language view of an article, tender or announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentDto {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub summary: String,
    pub status: String,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<DateTime<Utc>>,
    pub tags: Vec<TagDto>,
    pub files: Vec<FileDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<FileDto>,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Localize for ContentItem {
    type Output = ContentDto;

    fn localize(&self, language: Language, now: DateTime<Utc>) -> ContentDto {
        ContentDto {
            id: self.id.as_str().to_string(),
            kind: self.kind.as_str().to_string(),
            title: self.title.pick(language).to_string(),
            description: self.description.pick(language).to_string(),
            summary: self.summary.pick(language).to_string(),
            status: self.status.as_str().to_string(),
            author_id: self.author_id.into(),
            category_id: self.category_id.as_ref().map(|id| id.as_str().to_string()),
            closing_date: self.closing_date,
            tags: self.tags.localize(language, now),
            files: self.files.iter().map(FileDto::from).collect(),
            featured_media: self.featured_media.as_ref().map(FileDto::from),
            language: language.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
