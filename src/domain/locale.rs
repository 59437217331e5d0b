// src/domain/locale.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation language for bilingual records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Only the exact code `"ar"` selects Arabic; anything else is English.
    pub fn from_code(code: &str) -> Self {
        if code == "ar" { Self::Ar } else { Self::En }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text value with a mandatory primary (English) variant and an optional
/// Arabic variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedText {
    primary: String,
    arabic: Option<String>,
}

impl LocalizedText {
    pub fn new(primary: impl Into<String>, arabic: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            arabic,
        }
    }

    /// Build a value whose primary variant must not be blank.
    pub fn required(
        primary: impl Into<String>,
        arabic: Option<String>,
        field: &str,
    ) -> DomainResult<Self> {
        let primary = primary.into();
        if primary.trim().is_empty() {
            return Err(DomainError::Validation(format!("{field} cannot be empty")));
        }
        Ok(Self::new(primary, arabic))
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn arabic(&self) -> Option<&str> {
        self.arabic.as_deref()
    }

    /// Arabic when requested and non-empty, primary otherwise.
    pub fn pick(&self, language: Language) -> &str {
        match (language, self.arabic()) {
            (Language::Ar, Some(ar)) if !ar.trim().is_empty() => ar,
            _ => &self.primary,
        }
    }

    pub fn matches_any(&self, needle: &str) -> bool {
        self.primary == needle || self.arabic() == Some(needle)
    }
}
