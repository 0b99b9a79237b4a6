//! Material repository for database operations.

use shared::pagination::Page;
use sqlx::PgPool;

use super::escape_like;
use crate::entities::MaterialEntity;
use crate::metrics::QueryTimer;

/// Repository for material-related database operations.
#[derive(Clone)]
pub struct MaterialRepository {
    pool: PgPool,
}

impl MaterialRepository {
    /// Creates a new MaterialRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new material.
    ///
    /// A duplicate code surfaces as a unique violation on `materials_code_key`.
    pub async fn create(
        &self,
        code: &str,
        short_description: Option<&str>,
        description: Option<&str>,
        brand: Option<&str>,
        category: Option<&str>,
    ) -> Result<MaterialEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_material");
        let result = sqlx::query_as::<_, MaterialEntity>(
            r#"
            INSERT INTO materials (code, short_description, description, brand, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(code)
        .bind(short_description)
        .bind(description)
        .bind(brand)
        .bind(category)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find material by surrogate id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<MaterialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_material_by_id");
        let result = sqlx::query_as::<_, MaterialEntity>(
            r#"
            SELECT * FROM materials WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find material by its external code.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<MaterialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_material_by_code");
        let result = sqlx::query_as::<_, MaterialEntity>(
            r#"
            SELECT * FROM materials WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List materials.
    ///
    /// `code_prefix` matches the start of the code, `text` matches anywhere in
    /// either description. Both are case-insensitive and combined with AND.
    pub async fn list(
        &self,
        page: Page,
        code_prefix: Option<&str>,
        text: Option<&str>,
    ) -> Result<Vec<MaterialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_materials");
        let prefix_pattern = code_prefix.map(|p| format!("{}%", escape_like(p)));
        let text_pattern = text.map(|t| format!("%{}%", escape_like(t)));

        let result = sqlx::query_as::<_, MaterialEntity>(
            r#"
            SELECT * FROM materials
            WHERE ($1::text IS NULL OR code ILIKE $1)
              AND ($2::text IS NULL OR short_description ILIKE $2 OR description ILIKE $2)
            ORDER BY id
            OFFSET $3
            LIMIT $4
            "#,
        )
        .bind(prefix_pattern)
        .bind(text_pattern)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
