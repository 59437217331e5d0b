// src/application/queries/unified/mod.rs
mod aggregate;
mod by_tag;
mod include;

pub use aggregate::{UnifiedContentQuery, UnifiedContentService};
pub use by_tag::ContentByTagQuery;
pub use include::{IncludeKind, resolve_includes};
