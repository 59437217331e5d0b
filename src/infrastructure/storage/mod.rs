// src/infrastructure/storage/mod.rs
mod local;

pub use local::LocalFileUploader;
