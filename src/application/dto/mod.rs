pub mod auth;
pub mod catalog;
pub mod content;
pub mod files;
pub mod localize;
pub mod pagination;
pub mod tags;
pub mod unified;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use catalog::{CategoryDto, ExchangeRateDto};
pub use content::ContentDto;
pub use files::FileDto;
pub use localize::Localize;
pub use pagination::{PaginatedDto, PaginationMeta};
pub use tags::TagDto;
pub use unified::{UnifiedContentDto, UnifiedItems};
