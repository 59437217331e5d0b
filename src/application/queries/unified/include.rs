use crate::domain::content::ContentKind;

/// One key of the `include` list accepted by the unified endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeKind {
    Content(ContentKind),
    Tags,
    Categories,
    ExchangeRates,
    /// Tags linked to at least one item of the given kind.
    KindTags(ContentKind),
}

impl IncludeKind {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "articles" => Some(Self::Content(ContentKind::Article)),
            "tenders" => Some(Self::Content(ContentKind::Tender)),
            "announcements" => Some(Self::Content(ContentKind::Announcement)),
            "tags" => Some(Self::Tags),
            "categories" => Some(Self::Categories),
            "exchangeRates" => Some(Self::ExchangeRates),
            "articleTags" => Some(Self::KindTags(ContentKind::Article)),
            "tenderTags" => Some(Self::KindTags(ContentKind::Tender)),
            "announcementTags" => Some(Self::KindTags(ContentKind::Announcement)),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            IncludeKind::Content(kind) => kind.plural(),
            IncludeKind::Tags => "tags",
            IncludeKind::Categories => "categories",
            IncludeKind::ExchangeRates => "exchangeRates",
            IncludeKind::KindTags(ContentKind::Article) => "articleTags",
            IncludeKind::KindTags(ContentKind::Tender) => "tenderTags",
            IncludeKind::KindTags(ContentKind::Announcement) => "announcementTags",
        }
    }
}

/// Recognised keys in request order, without duplicates. Unknown keys are
/// dropped.
pub fn resolve_includes<I, S>(keys: I) -> Vec<IncludeKind>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolved = Vec::new();
    for key in keys {
        let key = key.as_ref().trim();
        match IncludeKind::parse(key) {
            Some(kind) if !resolved.contains(&kind) => resolved.push(kind),
            Some(_) => {}
            None => tracing::debug!(key, "ignoring unknown include key"),
        }
    }
    resolved
}
