// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_CONTENT_TAG_LINK: &str = "content_tags_pkey";
const CNT_CONTENT_TAG_TAG: &str = "content_tags_tag_id_fkey";
const CNT_CONTENT_FILE_LINK: &str = "content_files_pkey";
const CNT_CONTENT_CATEGORY: &str = "content_items_category_id_fkey";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_TAG_NAME_AR: &str = "tags_name_ar_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CONTENT_TAG_LINK => {
                        DomainError::Conflict("tag already linked to content".into())
                    }
                    CNT_CONTENT_TAG_TAG => DomainError::NotFound("tag not found".into()),
                    CNT_CONTENT_FILE_LINK => {
                        DomainError::Conflict("file already attached to content".into())
                    }
                    CNT_CONTENT_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_TAG_NAME | CNT_TAG_NAME_AR => {
                        DomainError::Conflict("tag name already exists".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
