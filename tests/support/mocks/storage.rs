// tests/support/mocks/storage.rs
use async_trait::async_trait;
use content_hub::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::{FileUploader, UploadedFile},
};
use content_hub::domain::file::{FileDescriptor, FileId};
use std::sync::Mutex;

/// アップロードを記録するだけのアップローダー。指定ファイル名で失敗させられる。
#[derive(Default)]
pub struct RecordingUploader {
    uploaded: Mutex<Vec<FileDescriptor>>,
    fail_on: Mutex<Option<String>>,
}

impl RecordingUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, file_name: &str) {
        *self.fail_on.lock().unwrap() = Some(file_name.to_string());
    }

    pub fn uploaded(&self) -> Vec<FileDescriptor> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileUploader for RecordingUploader {
    async fn upload_file(&self, file: UploadedFile) -> ApplicationResult<FileDescriptor> {
        if self.fail_on.lock().unwrap().as_deref() == Some(file.file_name.as_str()) {
            return Err(ApplicationError::upstream(format!(
                "storage rejected {}",
                file.file_name
            )));
        }

        let mut uploaded = self.uploaded.lock().unwrap();
        let n = uploaded.len() + 1;
        let now = super::time::fixed_now();
        let descriptor = FileDescriptor {
            id: FileId(format!("file-{n}")),
            url: format!("http://localhost/uploads/2024/01/{}", file.file_name),
            path: format!("2024/01/{}", file.file_name),
            original_name: file.file_name.clone(),
            mime_type: file.content_type.clone(),
            size: file.len() as i64,
            created_at: now,
            updated_at: now,
        };
        uploaded.push(descriptor.clone());
        Ok(descriptor)
    }
}
