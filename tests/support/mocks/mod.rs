// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog;
pub mod content_repo;
pub mod security;
pub mod storage;
pub mod tag_repo;
pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// セキュリティ関連
pub use security::{
    ADMIN_TOKEN, AUTHOR_ID, AUTHOR_TOKEN, DummyTokenManager, EDITOR_TOKEN, EXPIRED_TOKEN,
    VIEWER_TOKEN, author, editor, viewer,
};

// リポジトリ関連
pub use catalog::{FailingCategoryRepo, InMemoryCategoryRepo, InMemoryExchangeRateRepo};
pub use content_repo::InMemoryContentRepo;
pub use tag_repo::InMemoryTagRepo;

// ストレージ関連
pub use storage::RecordingUploader;
