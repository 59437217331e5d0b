// src/application/commands/content/mod.rs
mod capability;
mod create;
mod delete;
mod publish;
mod service;

pub use capability::ensure_allowed;
pub use create::{CreateContentCommand, CreateContentCommandBuilder, UploadField};
pub use delete::DeleteContentCommand;
pub use publish::SetPublishStateCommand;
pub use service::ContentCommandService;
