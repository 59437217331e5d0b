// src/application/commands/tags/mod.rs
mod create;
mod payload;
mod reconcile;
mod service;

pub use create::CreateTagCommand;
pub use payload::{TAG_IDS_FIELD, TAGS_FIELD, TagDraft, TagPayload, parse_tag_ids};
pub use reconcile::{TagReconciler, TagReconciliationRequest, TagReferences};
pub use service::TagCommandService;
