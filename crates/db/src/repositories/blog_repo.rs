//! Repository for the `blogs` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog::{ArchiveBucket, Blog, BlogFilter, CreateBlog, UpdateBlog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, content, category, date, tags, is_draft, published_at, created_at, updated_at";

/// Provides CRUD and aggregate queries for articles.
pub struct BlogRepo;

impl BlogRepo {
    /// Insert a new article, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBlog) -> Result<Blog, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogs (title, content, category, tags, is_draft, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.tags)
            .bind(input.is_draft)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of articles in one transaction.
    ///
    /// Either every row is written or none is.
    pub async fn create_many(pool: &PgPool, inputs: &[CreateBlog]) -> Result<Vec<Blog>, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogs (title, content, category, tags, is_draft, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let blog = sqlx::query_as::<_, Blog>(&query)
                .bind(&input.title)
                .bind(&input.content)
                .bind(&input.category)
                .bind(&input.tags)
                .bind(input.is_draft)
                .bind(input.published_at)
                .fetch_one(&mut *tx)
                .await?;
            created.push(blog);
        }
        tx.commit().await?;
        Ok(created)
    }

    /// Find an article by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List articles matching `filter`.
    ///
    /// Only the ORDER BY clause is formatted into the SQL, and it comes from
    /// the `BlogSortKey`/`SortOrder` allow-list. Ties break on `id` in the
    /// same direction so ordering is deterministic.
    pub async fn list(pool: &PgPool, filter: &BlogFilter) -> Result<Vec<Blog>, sqlx::Error> {
        let column = filter.sort_by.column();
        let direction = filter.order.keyword();
        let query = format!(
            "SELECT {COLUMNS} FROM blogs \
             WHERE ($1::text IS NULL OR category = $1) \
               AND ($2::boolean IS NULL OR is_draft = $2) \
               AND ($3::text[] IS NULL OR tags && $3) \
               AND ($4::timestamptz IS NULL OR date >= $4) \
               AND ($5::timestamptz IS NULL OR date <= $5) \
             ORDER BY {column} {direction}, id {direction}"
        );
        let tags = filter.tags.as_ref().filter(|t| !t.is_empty());
        sqlx::query_as::<_, Blog>(&query)
            .bind(filter.category.as_deref())
            .bind(filter.is_draft)
            .bind(tags)
            .bind(filter.start_date)
            .bind(filter.end_date)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every writable column of an article.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlog,
    ) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!(
            "UPDATE blogs SET \
                title = $2, content = $3, category = $4, tags = $5, \
                is_draft = $6, published_at = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.tags)
            .bind(input.is_draft)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("DELETE FROM blogs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Distinct categories in alphabetical order.
    pub async fn categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM blogs ORDER BY category")
            .fetch_all(pool)
            .await
    }

    /// Published-article counts per calendar month, newest month first.
    pub async fn archives(pool: &PgPool) -> Result<Vec<ArchiveBucket>, sqlx::Error> {
        sqlx::query_as::<_, ArchiveBucket>(
            "SELECT EXTRACT(YEAR FROM date)::int4 AS year, \
                    EXTRACT(MONTH FROM date)::int4 AS month, \
                    COUNT(*) AS count \
             FROM blogs \
             WHERE is_draft = false \
             GROUP BY 1, 2 \
             ORDER BY 1 DESC, 2 DESC",
        )
        .fetch_all(pool)
        .await
    }
}
