pub mod category;
pub mod content;
pub mod errors;
pub mod exchange_rate;
pub mod file;
pub mod locale;
pub mod pagination;
pub mod policy;
pub mod tag;
pub mod user;
