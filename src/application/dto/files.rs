use crate::domain::file::FileDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileDto {
    pub id: String,
    pub url: String,
    pub path: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&FileDescriptor> for FileDto {
    fn from(file: &FileDescriptor) -> Self {
        Self {
            id: file.id.as_str().to_string(),
            url: file.url.clone(),
            path: file.path.clone(),
            original_name: file.original_name.clone(),
            mime_type: file.mime_type.clone(),
            size: file.size,
            created_at: file.created_at,
            updated_at: file.updated_at,
        }
    }
}
