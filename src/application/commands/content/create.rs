// src/application/commands/content/create.rs
use super::{ContentCommandService, capability::ensure_allowed};
use crate::{
    application::{
        commands::tags::{TagReconciliationRequest, TagReferences},
        dto::{AuthenticatedUser, ContentDto, Localize},
        error::{ApplicationError, ApplicationResult},
        ports::storage::UploadedFile,
    },
    domain::{
        category::CategoryId,
        content::{ContentId, ContentKind, ContentRepository, ContentStatus, NewContentItem},
        errors::DomainError,
        locale::{Language, LocalizedText},
        policy::Action,
        tag::TagId,
    },
};
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use std::sync::Arc;

pub const FEATURED_MEDIA_FIELD: &str = "featuredMedia";
pub const IMAGES_FIELD: &str = "images";
pub const VIDEOS_FIELD: &str = "videos";

/// A multipart part for a file field, as it arrived on the wire.
#[derive(Debug, Clone)]
pub enum UploadField {
    File(UploadedFile),
    Text(String),
}

pub struct CreateContentCommand {
    pub kind: ContentKind,
    pub title: String,
    pub title_ar: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub summary: Option<String>,
    pub summary_ar: Option<String>,
    pub status: Option<String>,
    pub category_id: Option<String>,
    pub closing_date: Option<String>,
    pub tags: Option<String>,
    pub tag_ids: Option<String>,
    pub featured_media: Option<UploadField>,
    pub images: Vec<UploadField>,
    pub videos: Vec<UploadField>,
}

impl CreateContentCommand {
    pub fn builder(kind: ContentKind) -> CreateContentCommandBuilder {
        CreateContentCommandBuilder::new(kind)
    }
}

pub struct CreateContentCommandBuilder {
    command: CreateContentCommand,
}

impl CreateContentCommandBuilder {
    fn new(kind: ContentKind) -> Self {
        Self {
            command: CreateContentCommand {
                kind,
                title: String::new(),
                title_ar: None,
                description: None,
                description_ar: None,
                summary: None,
                summary_ar: None,
                status: None,
                category_id: None,
                closing_date: None,
                tags: None,
                tag_ids: None,
                featured_media: None,
                images: Vec::new(),
                videos: Vec::new(),
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>, title_ar: Option<&str>) -> Self {
        self.command.title = title.into();
        self.command.title_ar = title_ar.map(str::to_string);
        self
    }

    pub fn description(mut self, description: impl Into<String>, description_ar: Option<&str>) -> Self {
        self.command.description = Some(description.into());
        self.command.description_ar = description_ar.map(str::to_string);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>, summary_ar: Option<&str>) -> Self {
        self.command.summary = Some(summary.into());
        self.command.summary_ar = summary_ar.map(str::to_string);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.command.status = Some(status.into());
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.command.category_id = Some(category_id.into());
        self
    }

    pub fn closing_date(mut self, closing_date: impl Into<String>) -> Self {
        self.command.closing_date = Some(closing_date.into());
        self
    }

    pub fn tags(mut self, raw: impl Into<String>) -> Self {
        self.command.tags = Some(raw.into());
        self
    }

    pub fn tag_ids(mut self, raw: impl Into<String>) -> Self {
        self.command.tag_ids = Some(raw.into());
        self
    }

    pub fn featured_media(mut self, field: UploadField) -> Self {
        self.command.featured_media = Some(field);
        self
    }

    pub fn image(mut self, field: UploadField) -> Self {
        self.command.images.push(field);
        self
    }

    pub fn video(mut self, field: UploadField) -> Self {
        self.command.videos.push(field);
        self
    }

    pub fn build(self) -> CreateContentCommand {
        self.command
    }
}

/// File fields that passed the "is really a file" check.
struct MediaUploads {
    featured: Option<UploadedFile>,
    attachments: Vec<UploadedFile>,
}

impl MediaUploads {
    fn from_fields(
        featured: Option<UploadField>,
        images: Vec<UploadField>,
        videos: Vec<UploadField>,
    ) -> ApplicationResult<Self> {
        let featured = featured
            .map(|field| expect_file(FEATURED_MEDIA_FIELD, field))
            .transpose()?;
        let images = images
            .into_iter()
            .map(|field| expect_file(IMAGES_FIELD, field))
            .collect::<ApplicationResult<Vec<_>>>()?;
        let videos = videos
            .into_iter()
            .map(|field| expect_file(VIDEOS_FIELD, field))
            .collect::<ApplicationResult<Vec<_>>>()?;

        Ok(Self {
            featured: featured.filter(|file| !file.is_empty()),
            attachments: images
                .into_iter()
                .chain(videos)
                .filter(|file| !file.is_empty())
                .collect(),
        })
    }
}

fn expect_file(field: &str, value: UploadField) -> ApplicationResult<UploadedFile> {
    match value {
        UploadField::File(file) => Ok(file),
        UploadField::Text(_) => Err(ApplicationError::validation(format!(
            "{field} must be a file upload"
        ))),
    }
}

fn optional_text(primary: Option<String>, arabic: Option<String>) -> LocalizedText {
    LocalizedText::new(primary.unwrap_or_default(), arabic.filter(|s| !s.trim().is_empty()))
}

fn parse_closing_date(raw: Option<String>) -> ApplicationResult<Option<DateTime<Utc>>> {
    match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| ApplicationError::validation("closingDate must be an RFC 3339 timestamp")),
        None => Ok(None),
    }
}

fn translate_link_error(err: DomainError) -> ApplicationError {
    match err {
        DomainError::Conflict(_) => {
            ApplicationError::duplicate_tag("a tag is already attached to this content")
        }
        other => other.into(),
    }
}

impl ContentCommandService {
    /// Create a content item and attach its tags and media.
    ///
    /// The bare item is inserted first. If reconciling tags or storing any
    /// upload fails afterwards, the item is deleted again and the cause is
    /// returned wrapped in `CreationFailed`.
    pub async fn create_content(
        &self,
        actor: &AuthenticatedUser,
        command: CreateContentCommand,
        language: Language,
    ) -> ApplicationResult<ContentDto> {
        ensure_allowed(actor, Action::CreateContent)?;

        let CreateContentCommand {
            kind,
            title,
            title_ar,
            description,
            description_ar,
            summary,
            summary_ar,
            status,
            category_id,
            closing_date,
            tags,
            tag_ids,
            featured_media,
            images,
            videos,
        } = command;

        let media = MediaUploads::from_fields(featured_media, images, videos)?;
        let references = TagReferences::parse(&TagReconciliationRequest { tags, tag_ids })?;

        let status = match status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => value.parse::<ContentStatus>()?,
            None => ContentStatus::Draft,
        };
        let now = self.clock.now();
        let new_item = NewContentItem {
            kind,
            title: LocalizedText::required(title, title_ar.filter(|s| !s.trim().is_empty()), "title")?,
            description: optional_text(description, description_ar),
            summary: optional_text(summary, summary_ar),
            status,
            author_id: actor.id,
            category_id: category_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .map(CategoryId),
            closing_date: parse_closing_date(closing_date)?,
            created_at: now,
            updated_at: now,
        };

        let repo = self.repos.for_kind(kind);
        let created = repo.insert(new_item).await?;
        tracing::info!(content_id = %created.id, kind = %kind, user_id = %actor.id, "content item created");

        if let Err(cause) = self.enrich(repo, &created.id, references, media).await {
            self.compensate(repo, &created.id).await;
            return Err(ApplicationError::creation_failed(cause));
        }

        let item = repo
            .find_by_id(&created.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{kind} not found")))?;
        Ok(item.localize(language, self.clock.now()))
    }

    async fn enrich(
        &self,
        repo: &Arc<dyn ContentRepository>,
        id: &ContentId,
        references: TagReferences,
        media: MediaUploads,
    ) -> ApplicationResult<()> {
        let verified = self.reconciler.resolve(references).await?;
        if !verified.is_empty() {
            let tag_ids: Vec<TagId> = verified.into_iter().map(|tag| tag.id).collect();
            repo.attach_tags(id, &tag_ids)
                .await
                .map_err(translate_link_error)?;
        }

        if let Some(file) = media.featured {
            let stored = self.uploader.upload_file(file).await?;
            repo.set_featured_media(id, &stored).await?;
        }

        let uploads = media
            .attachments
            .into_iter()
            .map(|file| self.uploader.upload_file(file));
        let stored = try_join_all(uploads).await?;
        for file in &stored {
            repo.attach_file(id, file).await?;
        }

        Ok(())
    }

    async fn compensate(&self, repo: &Arc<dyn ContentRepository>, id: &ContentId) {
        match repo.delete(id).await {
            Ok(()) => tracing::warn!(content_id = %id, "content item rolled back"),
            Err(err) => tracing::error!(
                content_id = %id,
                error = %err,
                "compensating delete failed; content item may be orphaned"
            ),
        }
    }
}
