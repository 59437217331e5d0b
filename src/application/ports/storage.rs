// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::file::FileDescriptor;
use async_trait::async_trait;
use bytes::Bytes;

/// A binary upload received from a client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

#[async_trait]
pub trait FileUploader: Send + Sync {
    async fn upload_file(&self, file: UploadedFile) -> ApplicationResult<FileDescriptor>;
}
