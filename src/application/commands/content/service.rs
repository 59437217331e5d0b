// src/application/commands/content/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::tags::TagReconciler,
        ports::{storage::FileUploader, time::Clock},
    },
    domain::content::ContentRepositories,
};

pub struct ContentCommandService {
    pub(super) repos: ContentRepositories,
    pub(super) reconciler: Arc<TagReconciler>,
    pub(super) uploader: Arc<dyn FileUploader>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    pub fn new(
        repos: ContentRepositories,
        reconciler: Arc<TagReconciler>,
        uploader: Arc<dyn FileUploader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repos,
            reconciler,
            uploader,
            clock,
        }
    }
}
