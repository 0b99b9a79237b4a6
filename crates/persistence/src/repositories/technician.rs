//! Technician repository for database operations.

use sqlx::PgPool;

use crate::entities::TechnicianEntity;
use crate::metrics::QueryTimer;

/// Repository for technician-related database operations.
#[derive(Clone)]
pub struct TechnicianRepository {
    pool: PgPool,
}

impl TechnicianRepository {
    /// Creates a new TechnicianRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a technician. A duplicate name violates `technicians_name_key`.
    pub async fn create(&self, name: &str) -> Result<TechnicianEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_technician");
        let result = sqlx::query_as::<_, TechnicianEntity>(
            r#"
            INSERT INTO technicians (name) VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<TechnicianEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_technician_by_id");
        let result = sqlx::query_as::<_, TechnicianEntity>(
            r#"
            SELECT * FROM technicians WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn list_all(&self) -> Result<Vec<TechnicianEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_technicians");
        let result = sqlx::query_as::<_, TechnicianEntity>(
            r#"
            SELECT * FROM technicians ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Rename a technician. Returns None if the id does not exist.
    pub async fn rename(&self, id: i64, name: &str) -> Result<Option<TechnicianEntity>, sqlx::Error> {
        let timer = QueryTimer::new("rename_technician");
        let result = sqlx::query_as::<_, TechnicianEntity>(
            r#"
            UPDATE technicians SET name = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a technician.
    /// Work orders assigned to it are unassigned by the foreign key.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_technician");
        let result = sqlx::query(
            r#"
            DELETE FROM technicians WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
