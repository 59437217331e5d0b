mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetContentQuery;
pub use list::ListContentQuery;
pub use service::ContentQueryService;
