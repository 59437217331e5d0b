// src/infrastructure/repositories/postgres_content.rs
use super::map_sqlx;
use super::rows::{FILE_COLUMNS, FileRow, LinkedFileRow, LinkedTagRow, TAG_COLUMNS};
use crate::domain::category::CategoryId;
use crate::domain::content::{
    ContentFilter, ContentId, ContentItem, ContentKind, ContentRepositories, ContentRepository,
    ContentStatus, NewContentItem,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::file::FileDescriptor;
use crate::domain::locale::LocalizedText;
use crate::domain::pagination::{Page, SortDirection, SortField};
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use std::sync::Arc;

const CONTENT_COLUMNS: &str = "ci.id, ci.kind, ci.title, ci.title_ar, ci.description, ci.description_ar, \
     ci.summary, ci.summary_ar, ci.status, ci.author_id, ci.category_id, ci.closing_date, \
     ci.featured_media_id, ci.created_at, ci.updated_at";

/// Content items of a single kind, stored in the shared `content_items` table.
#[derive(Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
    kind: ContentKind,
}

impl PostgresContentRepository {
    pub fn new(pool: PgPool, kind: ContentKind) -> Self {
        Self { pool, kind }
    }

    pub fn repositories(pool: PgPool) -> ContentRepositories {
        ContentRepositories {
            articles: Arc::new(Self::new(pool.clone(), ContentKind::Article)),
            tenders: Arc::new(Self::new(pool.clone(), ContentKind::Tender)),
            announcements: Arc::new(Self::new(pool, ContentKind::Announcement)),
        }
    }

    fn not_found(&self) -> DomainError {
        DomainError::NotFound(format!("{} not found", self.kind))
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: String,
    kind: String,
    title: String,
    title_ar: Option<String>,
    description: String,
    description_ar: Option<String>,
    summary: String,
    summary_ar: Option<String>,
    status: String,
    author_id: i64,
    category_id: Option<String>,
    closing_date: Option<DateTime<Utc>>,
    featured_media_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContentRow {
    fn into_item(
        self,
        tags: Vec<Tag>,
        files: Vec<FileDescriptor>,
        featured_media: Option<FileDescriptor>,
    ) -> DomainResult<ContentItem> {
        Ok(ContentItem {
            id: ContentId::new(self.id)?,
            kind: self.kind.parse()?,
            title: LocalizedText::new(self.title, self.title_ar),
            description: LocalizedText::new(self.description, self.description_ar),
            summary: LocalizedText::new(self.summary, self.summary_ar),
            status: self.status.parse()?,
            author_id: UserId::new(self.author_id)?,
            category_id: self.category_id.map(CategoryId),
            closing_date: self.closing_date,
            tags,
            files,
            featured_media,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, kind: ContentKind, filter: &ContentFilter) {
    builder.push(" WHERE ci.kind = ");
    builder.push_bind(kind.as_str());

    if let Some(status) = filter.status {
        builder.push(" AND ci.status = ");
        builder.push_bind(status.as_str());
    }

    if let Some(search) = filter.page.search() {
        let pattern = format!("%{search}%");
        builder.push(" AND (");
        for (index, column) in [
            "ci.title",
            "ci.title_ar",
            "ci.description",
            "ci.description_ar",
            "ci.summary",
            "ci.summary_ar",
        ]
        .iter()
        .enumerate()
        {
            if index > 0 {
                builder.push(" OR ");
            }
            builder.push(*column);
            builder.push(" ILIKE ");
            builder.push_bind(pattern.clone());
        }
        builder.push(")");
    }

    if let Some(tag_id) = &filter.tag_id {
        builder.push(
            " AND EXISTS (SELECT 1 FROM content_tags ct WHERE ct.content_id = ci.id AND ct.tag_id = ",
        );
        builder.push_bind(tag_id.as_str().to_string());
        builder.push(")");
    }
}

fn order_clause(field: SortField, direction: SortDirection) -> String {
    let column = match field {
        SortField::CreatedAt => "ci.created_at",
        SortField::UpdatedAt => "ci.updated_at",
        SortField::Title => "ci.title",
    };
    let direction = match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    format!(" ORDER BY {column} {direction}, ci.id ASC")
}

impl PostgresContentRepository {
    /// Loads tags, attachments and featured media for a batch of rows.
    async fn hydrate(&self, rows: Vec<ContentRow>) -> DomainResult<Vec<ContentItem>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
        let featured_ids: Vec<String> = rows
            .iter()
            .filter_map(|row| row.featured_media_id.clone())
            .collect();

        let tags_sql = format!(
            "SELECT ct.content_id, {TAG_COLUMNS} FROM content_tags ct
             JOIN tags t ON t.id = ct.tag_id
             WHERE ct.content_id = ANY($1)
             ORDER BY ct.content_id, ct.position"
        );
        let files_sql = format!(
            "SELECT cf.content_id, {FILE_COLUMNS} FROM content_files cf
             JOIN files f ON f.id = cf.file_id
             WHERE cf.content_id = ANY($1)
             ORDER BY cf.content_id, cf.position"
        );
        let featured_sql = format!("SELECT {FILE_COLUMNS} FROM files f WHERE f.id = ANY($1)");

        let (tag_rows, file_rows, featured_rows) = tokio::try_join!(
            sqlx::query_as::<_, LinkedTagRow>(&tags_sql)
                .bind(&ids[..])
                .fetch_all(&self.pool),
            sqlx::query_as::<_, LinkedFileRow>(&files_sql)
                .bind(&ids[..])
                .fetch_all(&self.pool),
            sqlx::query_as::<_, FileRow>(&featured_sql)
                .bind(&featured_ids[..])
                .fetch_all(&self.pool),
        )
        .map_err(map_sqlx)?;

        let mut tags: HashMap<String, Vec<Tag>> = HashMap::new();
        for row in tag_rows {
            tags.entry(row.content_id)
                .or_default()
                .push(Tag::try_from(row.tag)?);
        }

        let mut files: HashMap<String, Vec<FileDescriptor>> = HashMap::new();
        for row in file_rows {
            files
                .entry(row.content_id)
                .or_default()
                .push(FileDescriptor::from(row.file));
        }

        let featured: HashMap<String, FileDescriptor> = featured_rows
            .into_iter()
            .map(|row| (row.id.clone(), FileDescriptor::from(row)))
            .collect();

        rows.into_iter()
            .map(|row| {
                let item_tags = tags.remove(&row.id).unwrap_or_default();
                let item_files = files.remove(&row.id).unwrap_or_default();
                let media = row
                    .featured_media_id
                    .as_ref()
                    .and_then(|id| featured.get(id).cloned());
                row.into_item(item_tags, item_files, media)
            })
            .collect()
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let NewContentItem {
            kind,
            title,
            description,
            summary,
            status,
            author_id,
            category_id,
            closing_date,
            created_at,
            updated_at,
        } = item;

        if kind != self.kind {
            return Err(DomainError::Validation(format!(
                "cannot store a {kind} in the {} repository",
                self.kind
            )));
        }

        let sql = format!(
            "INSERT INTO content_items AS ci
                (kind, title, title_ar, description, description_ar, summary, summary_ar,
                 status, author_id, category_id, closing_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {CONTENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContentRow>(&sql)
            .bind(kind.as_str())
            .bind(title.primary())
            .bind(title.arabic())
            .bind(description.primary())
            .bind(description.arabic())
            .bind(summary.primary())
            .bind(summary.arabic())
            .bind(status.as_str())
            .bind(i64::from(author_id))
            .bind(category_id.as_ref().map(CategoryId::as_str))
            .bind(closing_date)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.into_item(Vec::new(), Vec::new(), None)
    }

    async fn find_by_id(&self, id: &ContentId) -> DomainResult<Option<ContentItem>> {
        let sql = format!("SELECT {CONTENT_COLUMNS} FROM content_items ci WHERE ci.id = $1 AND ci.kind = $2");
        let row = sqlx::query_as::<_, ContentRow>(&sql)
            .bind(id.as_str())
            .bind(self.kind.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ContentFilter) -> DomainResult<Page<ContentItem>> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM content_items ci");
        push_conditions(&mut count, self.kind, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {CONTENT_COLUMNS} FROM content_items ci"));
        push_conditions(&mut select, self.kind, filter);
        select.push(order_clause(
            filter.page.sort_field(),
            filter.page.sort_direction(),
        ));
        select.push(" LIMIT ");
        select.push_bind(i64::from(filter.page.limit()));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(filter.page.offset()).unwrap_or(i64::MAX));

        let rows = select
            .build_query_as::<ContentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let items = self.hydrate(rows).await?;

        Ok(Page::new(
            items,
            u64::try_from(total).unwrap_or_default(),
            &filter.page,
        ))
    }

    async fn list_published(&self) -> DomainResult<Vec<ContentItem>> {
        let sql = format!(
            "SELECT {CONTENT_COLUMNS} FROM content_items ci
             WHERE ci.kind = $1 AND ci.status = $2
             ORDER BY ci.created_at DESC, ci.id ASC"
        );
        let rows = sqlx::query_as::<_, ContentRow>(&sql)
            .bind(self.kind.as_str())
            .bind(ContentStatus::Published.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.hydrate(rows).await
    }

    async fn attach_tags(&self, id: &ContentId, tags: &[TagId]) -> DomainResult<()> {
        if tags.is_empty() {
            return Ok(());
        }
        let tag_ids: Vec<&str> = tags.iter().map(TagId::as_str).collect();

        sqlx::query(
            "INSERT INTO content_tags (content_id, tag_id, position)
             SELECT $1, t.tag_id,
                    (t.ord + COALESCE((SELECT MAX(position) FROM content_tags WHERE content_id = $1), 0))::int
             FROM UNNEST($2::text[]) WITH ORDINALITY AS t(tag_id, ord)",
        )
        .bind(id.as_str())
        .bind(&tag_ids[..])
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn set_featured_media(&self, id: &ContentId, file: &FileDescriptor) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE content_items SET featured_media_id = $1 WHERE id = $2 AND kind = $3",
        )
        .bind(file.id.as_str())
        .bind(id.as_str())
        .bind(self.kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(self.not_found());
        }
        Ok(())
    }

    async fn attach_file(&self, id: &ContentId, file: &FileDescriptor) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO content_files (content_id, file_id, position)
             VALUES ($1, $2, COALESCE((SELECT MAX(position) + 1 FROM content_files WHERE content_id = $1), 0))",
        )
        .bind(id.as_str())
        .bind(file.id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn set_status(
        &self,
        id: &ContentId,
        status: ContentStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<ContentItem> {
        let result = sqlx::query(
            "UPDATE content_items SET status = $1, updated_at = $2 WHERE id = $3 AND kind = $4",
        )
        .bind(status.as_str())
        .bind(updated_at)
        .bind(id.as_str())
        .bind(self.kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(self.not_found());
        }

        self.find_by_id(id).await?.ok_or_else(|| self.not_found())
    }

    async fn delete(&self, id: &ContentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM content_items WHERE id = $1 AND kind = $2")
            .bind(id.as_str())
            .bind(self.kind.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(self.not_found());
        }
        Ok(())
    }
}
