// src/application/dto/localize.rs
use crate::domain::locale::Language;
use chrono::{DateTime, Utc};

/// Projects a bilingual record into a single-language view.
///
/// Implementations are pure: `now` stands in for missing timestamps so the
/// same input always maps to the same output.
pub trait Localize {
    type Output;

    fn localize(&self, language: Language, now: DateTime<Utc>) -> Self::Output;
}

impl<T: Localize> Localize for [T] {
    type Output = Vec<T::Output>;

    fn localize(&self, language: Language, now: DateTime<Utc>) -> Self::Output {
        self.iter().map(|item| item.localize(language, now)).collect()
    }
}
