// src/infrastructure/repositories/rows.rs
//! Row types shared by several repositories.
use crate::domain::errors::DomainError;
use crate::domain::file::{FileDescriptor, FileId};
use crate::domain::locale::LocalizedText;
use crate::domain::tag::{Tag, TagId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub(super) const TAG_COLUMNS: &str = "t.id, t.name, t.name_ar, t.created_at, t.updated_at";
pub(super) const FILE_COLUMNS: &str =
    "f.id, f.url, f.path, f.original_name, f.mime_type, f.size, f.created_at, f.updated_at";

#[derive(Debug, FromRow)]
pub(super) struct TagRow {
    pub id: String,
    pub name: String,
    pub name_ar: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: LocalizedText::new(row.name, row.name_ar),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct LinkedTagRow {
    pub content_id: String,
    #[sqlx(flatten)]
    pub tag: TagRow,
}

#[derive(Debug, FromRow)]
pub(super) struct FileRow {
    pub id: String,
    pub url: String,
    pub path: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FileRow> for FileDescriptor {
    fn from(row: FileRow) -> Self {
        FileDescriptor {
            id: FileId(row.id),
            url: row.url,
            path: row.path,
            original_name: row.original_name,
            mime_type: row.mime_type,
            size: row.size,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct LinkedFileRow {
    pub content_id: String,
    #[sqlx(flatten)]
    pub file: FileRow,
}
