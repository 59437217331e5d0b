// src/application/commands/tags/payload.rs
//! Parsers for the loosely formatted `tags` and `tagIds` form fields.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::tag::TagId;
use serde::Deserialize;

pub const TAGS_FIELD: &str = "tags";
pub const TAG_IDS_FIELD: &str = "tagIds";

/// A tag described by the client, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TagDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "nameAr", alias = "name_ar")]
    pub name_ar: Option<String>,
}

impl TagDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            name_ar: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DraftRepr {
    Name(String),
    Draft(TagDraft),
}

impl From<DraftRepr> for TagDraft {
    fn from(value: DraftRepr) -> Self {
        match value {
            DraftRepr::Name(name) => TagDraft::named(name),
            DraftRepr::Draft(draft) => draft,
        }
    }
}

/// Shape the raw `tags` value was recognised as.
///
/// Parsing tries, in order: a JSON array, a single JSON value, and finally
/// the input wrapped in brackets (`{..},{..}` sent without `[` `]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPayload {
    Empty,
    Array(Vec<TagDraft>),
    Object(TagDraft),
    Fragment(Vec<TagDraft>),
}

impl TagPayload {
    pub fn parse(raw: &str, field: &str) -> ApplicationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Empty);
        }

        if let Ok(items) = serde_json::from_str::<Vec<DraftRepr>>(trimmed) {
            return Ok(Self::Array(items.into_iter().map(Into::into).collect()));
        }

        if let Ok(item) = serde_json::from_str::<DraftRepr>(trimmed) {
            return Ok(Self::Object(item.into()));
        }

        serde_json::from_str::<Vec<DraftRepr>>(&format!("[{trimmed}]"))
            .map(|items| Self::Fragment(items.into_iter().map(Into::into).collect()))
            .map_err(|err| ApplicationError::malformed(field, err.to_string()))
    }

    pub fn into_drafts(self) -> Vec<TagDraft> {
        match self {
            TagPayload::Empty => Vec::new(),
            TagPayload::Array(drafts) | TagPayload::Fragment(drafts) => drafts,
            TagPayload::Object(draft) => vec![draft],
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(i64),
}

/// Accepts a JSON array of ids or a comma separated list.
pub fn parse_tag_ids(raw: &str, field: &str) -> ApplicationResult<Vec<TagId>> {
    let trimmed = raw.trim();
    let values: Vec<String> = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<IdRepr>>(trimmed)
            .map_err(|err| ApplicationError::malformed(field, err.to_string()))?
            .into_iter()
            .map(|id| match id {
                IdRepr::Text(text) => text,
                IdRepr::Number(number) => number.to_string(),
            })
            .collect()
    } else {
        trimmed.split(',').map(str::to_string).collect()
    };

    values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| TagId::new(value).map_err(ApplicationError::from))
        .collect()
}
