// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_catalog;
mod postgres_content;
mod postgres_tag;
mod rows;

pub use error::map_sqlx;
pub use postgres_catalog::{PostgresCategoryRepository, PostgresExchangeRateRepository};
pub use postgres_content::PostgresContentRepository;
pub use postgres_tag::PostgresTagRepository;
