// src/infrastructure/storage/local.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{storage::{FileUploader, UploadedFile}, time::Clock},
};
use crate::domain::file::{FileDescriptor, FileId};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use sqlx::{FromRow, PgPool};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Writes uploads below a local directory and records them in `files`.
///
/// Files land at `{root}/{yyyy}/{mm}/{uuid}.{ext}` and are served back under
/// `{public_base_url}/uploads/...`.
#[derive(Clone)]
pub struct LocalFileUploader {
    root: PathBuf,
    public_base_url: String,
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl LocalFileUploader {
    pub fn new(
        root: impl Into<PathBuf>,
        public_base_url: impl Into<String>,
        pool: PgPool,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            pool,
            clock,
        }
    }
}

#[derive(Debug, FromRow)]
struct StoredFileRow {
    id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Relative storage key for an upload made at `now`.
fn storage_key(file_name: &str, now: DateTime<Utc>) -> String {
    let stem = Uuid::new_v4();
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    match extension {
        Some(ext) => format!("{:04}/{:02}/{stem}.{ext}", now.year(), now.month()),
        None => format!("{:04}/{:02}/{stem}", now.year(), now.month()),
    }
}

#[async_trait]
impl FileUploader for LocalFileUploader {
    async fn upload_file(&self, file: UploadedFile) -> ApplicationResult<FileDescriptor> {
        let key = storage_key(&file.file_name, self.clock.now());
        let target = self.root.join(&key);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| ApplicationError::upstream(format!("create upload dir: {err}")))?;
        }
        tokio::fs::write(&target, &file.bytes)
            .await
            .map_err(|err| ApplicationError::upstream(format!("write upload: {err}")))?;

        let url = format!("{}/uploads/{key}", self.public_base_url);
        let mime_type = if file.content_type.trim().is_empty() {
            DEFAULT_MIME_TYPE.to_string()
        } else {
            file.content_type.clone()
        };
        let size = i64::try_from(file.len())
            .map_err(|_| ApplicationError::validation("upload is too large"))?;

        let row = sqlx::query_as::<_, StoredFileRow>(
            "INSERT INTO files (url, path, original_name, mime_type, size)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, created_at, updated_at",
        )
        .bind(&url)
        .bind(&key)
        .bind(&file.file_name)
        .bind(&mime_type)
        .bind(size)
        .fetch_one(&self.pool)
        .await;

        let row = match row {
            Ok(row) => row,
            Err(err) => {
                if let Err(cleanup) = tokio::fs::remove_file(&target).await {
                    tracing::warn!(path = %target.display(), error = %cleanup, "failed to remove orphaned upload");
                }
                return Err(ApplicationError::upstream(format!("record upload: {err}")));
            }
        };

        tracing::info!(file_id = %row.id, path = %key, size, "file uploaded");

        Ok(FileDescriptor {
            id: FileId(row.id),
            url,
            path: key,
            original_name: file.file_name,
            mime_type,
            size,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
