pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ContentFilter, ContentItem, NewContentItem};
pub use repository::{ContentRepositories, ContentRepository};
pub use value_objects::{ContentId, ContentKind, ContentStatus};
