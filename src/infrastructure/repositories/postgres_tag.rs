// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use super::rows::{TAG_COLUMNS, TagRow};
use crate::domain::content::ContentKind;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest, SortDirection, SortField};
use crate::domain::tag::{NewTag, Tag, TagId, TagRepository};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_colliding(&self, tag: &NewTag) -> DomainResult<Option<Tag>> {
        let sql = format!(
            "SELECT {TAG_COLUMNS} FROM tags t
             WHERE t.name = $1 OR ($2::text IS NOT NULL AND t.name_ar = $2)
             ORDER BY (t.name = $1) DESC
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, TagRow>(&sql)
            .bind(tag.name.primary())
            .bind(tag.name.arabic())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Tag::try_from).transpose()
    }
}

fn push_search(builder: &mut QueryBuilder<'_, Postgres>, request: &PageRequest) {
    if let Some(search) = request.search() {
        let pattern = format!("%{search}%");
        builder.push(" WHERE (t.name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR t.name_ar ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

fn order_clause(field: SortField, direction: SortDirection) -> String {
    let column = match field {
        SortField::Title => "t.name",
        SortField::CreatedAt => "t.created_at",
        SortField::UpdatedAt => "t.updated_at",
    };
    let direction = match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    format!(" ORDER BY {column} {direction} NULLS LAST, t.id ASC")
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_by_id(&self, id: &TagId) -> DomainResult<Option<Tag>> {
        let sql = format!("SELECT {TAG_COLUMNS} FROM tags t WHERE t.id = $1");
        let row = sqlx::query_as::<_, TagRow>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Tag::try_from).transpose()
    }

    async fn create(&self, tag: NewTag) -> DomainResult<Tag> {
        if let Some(existing) = self.find_colliding(&tag).await? {
            tracing::debug!(tag_id = %existing.id, "tag already exists");
            return Ok(existing);
        }

        let sql = format!(
            "INSERT INTO tags AS t (name, name_ar, created_at, updated_at)
             VALUES ($1, $2, now(), now())
             ON CONFLICT DO NOTHING
             RETURNING {TAG_COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, TagRow>(&sql)
            .bind(tag.name.primary())
            .bind(tag.name.arabic())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match inserted {
            Some(row) => Tag::try_from(row),
            // Lost a race with a concurrent insert of the same name.
            None => self
                .find_colliding(&tag)
                .await?
                .ok_or_else(|| DomainError::Conflict("tag name already exists".into())),
        }
    }

    async fn list(&self, request: &PageRequest) -> DomainResult<Page<Tag>> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM tags t");
        push_search(&mut count, request);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {TAG_COLUMNS} FROM tags t"));
        push_search(&mut select, request);
        select.push(order_clause(request.sort_field(), request.sort_direction()));
        select.push(" LIMIT ");
        select.push_bind(i64::from(request.limit()));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(request.offset()).unwrap_or(i64::MAX));

        let rows = select
            .build_query_as::<TagRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        let tags = rows
            .into_iter()
            .map(Tag::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page::new(tags, u64::try_from(total).unwrap_or_default(), request))
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let sql = format!("SELECT {TAG_COLUMNS} FROM tags t ORDER BY t.name ASC");
        sqlx::query_as::<_, TagRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Tag::try_from)
            .collect()
    }

    async fn list_for_kind(&self, kind: ContentKind) -> DomainResult<Vec<Tag>> {
        let sql = format!(
            "SELECT DISTINCT {TAG_COLUMNS} FROM tags t
             JOIN content_tags ct ON ct.tag_id = t.id
             JOIN content_items ci ON ci.id = ct.content_id
             WHERE ci.kind = $1
             ORDER BY t.name ASC"
        );
        sqlx::query_as::<_, TagRow>(&sql)
            .bind(kind.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Tag::try_from)
            .collect()
    }
}
