//! Work order repository for database operations.

use chrono::{DateTime, Utc};
use domain::services::{work_order_code, TechnicianFilter, WORK_ORDER_CODE_PREFIX};
use shared::pagination::Page;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use super::escape_like;
use crate::entities::{WorkOrderEntity, WorkOrderSummaryEntity};
use crate::metrics::QueryTimer;

/// Unique constraint on the human-readable code.
const CODE_CONSTRAINT: &str = "work_orders_code_key";

/// Input for inserting a work order.
#[derive(Debug, Clone)]
pub struct NewWorkOrder<'a> {
    pub material_code: &'a str,
    pub technician_id: Option<i64>,
    pub quantity: i32,
    pub notes: Option<&'a str>,
    /// Falls back to the insertion time when None.
    pub started_at: Option<DateTime<Utc>>,
    pub intermediate_process: bool,
}

/// Filters for the admin pending listing.
#[derive(Debug, Clone, Default)]
pub struct PendingFilter {
    pub material_code: Option<String>,
    pub technician: Option<TechnicianFilter>,
}

/// Repository for work order database operations.
#[derive(Clone)]
pub struct WorkOrderRepository {
    pool: PgPool,
}

impl WorkOrderRepository {
    /// Creates a new WorkOrderRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a pending work order.
    ///
    /// The surrogate id is reserved from the table sequence first so the
    /// derived code is written by the same INSERT. If the code is somehow
    /// already taken, the row is stored under a placeholder code instead and
    /// the collision is logged; the caller still gets the created row.
    pub async fn create(&self, input: &NewWorkOrder<'_>) -> Result<WorkOrderEntity, sqlx::Error> {
        let id = self.reserve_id().await?;
        let code = work_order_code(id);

        match self.insert(id, &code, input).await {
            Err(err) if is_code_collision(&err) => {
                let placeholder = placeholder_code();
                warn!(
                    work_order_id = id,
                    code = %code,
                    placeholder = %placeholder,
                    "Work order code already taken, storing placeholder code"
                );
                metrics::counter!("work_order_code_collisions_total").increment(1);
                self.insert(id, &placeholder, input).await
            }
            other => other,
        }
    }

    async fn reserve_id(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("reserve_work_order_id");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT nextval(pg_get_serial_sequence('work_orders', 'id'))
            "#,
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    async fn insert(
        &self,
        id: i64,
        code: &str,
        input: &NewWorkOrder<'_>,
    ) -> Result<WorkOrderEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_work_order");
        let result = sqlx::query_as::<_, WorkOrderEntity>(
            r#"
            INSERT INTO work_orders (id, code, material_code, technician_id, quantity, notes,
                                     started_at, pending, intermediate_process)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), TRUE, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(code)
        .bind(input.material_code)
        .bind(input.technician_id)
        .bind(input.quantity)
        .bind(input.notes)
        .bind(input.started_at)
        .bind(input.intermediate_process)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<WorkOrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_work_order_by_id");
        let result = sqlx::query_as::<_, WorkOrderEntity>(
            r#"
            SELECT * FROM work_orders WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List work orders, optionally restricted by the intermediate-process flag.
    pub async fn list(
        &self,
        page: Page,
        intermediate_process: Option<bool>,
    ) -> Result<Vec<WorkOrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_work_orders");
        let result = sqlx::query_as::<_, WorkOrderEntity>(
            r#"
            SELECT * FROM work_orders
            WHERE ($1::boolean IS NULL OR intermediate_process = $1)
            ORDER BY id
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(intermediate_process)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List pending work orders, newest start first.
    ///
    /// A name filter only matches work orders that have a technician assigned.
    pub async fn list_pending(
        &self,
        filter: &PendingFilter,
        page: Page,
    ) -> Result<Vec<WorkOrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_pending_work_orders");
        let material_pattern = filter
            .material_code
            .as_deref()
            .map(|m| format!("%{}%", escape_like(m)));
        let (technician_id, name_pattern) = match &filter.technician {
            Some(TechnicianFilter::Id(id)) => (Some(*id), None),
            Some(TechnicianFilter::NameContains(name)) => {
                (None, Some(format!("%{}%", escape_like(name))))
            }
            None => (None, None),
        };

        let result = sqlx::query_as::<_, WorkOrderEntity>(
            r#"
            SELECT w.* FROM work_orders w
            LEFT JOIN technicians t ON t.id = w.technician_id
            WHERE w.pending
              AND ($1::text IS NULL OR w.material_code ILIKE $1)
              AND ($2::bigint IS NULL OR w.technician_id = $2)
              AND ($3::text IS NULL OR t.name ILIKE $3)
            ORDER BY w.started_at DESC, w.id DESC
            OFFSET $4
            LIMIT $5
            "#,
        )
        .bind(material_pattern)
        .bind(technician_id)
        .bind(name_pattern)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Most recently closed work orders; rows without an end timestamp sort last.
    pub async fn list_closed(&self, limit: i64) -> Result<Vec<WorkOrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_closed_work_orders");
        let result = sqlx::query_as::<_, WorkOrderEntity>(
            r#"
            SELECT * FROM work_orders
            WHERE NOT pending
            ORDER BY finished_at DESC NULLS LAST, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Count intermediate-process work orders per material code.
    pub async fn intermediate_summary(&self) -> Result<Vec<WorkOrderSummaryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("work_order_intermediate_summary");
        let result = sqlx::query_as::<_, WorkOrderSummaryEntity>(
            r#"
            SELECT material_code, COUNT(*) AS total
            FROM work_orders
            WHERE intermediate_process
            GROUP BY material_code
            ORDER BY material_code
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Mark a work order closed now. Closing again re-sets the end timestamp.
    /// Returns None if the id does not exist.
    pub async fn close(&self, id: i64) -> Result<Option<WorkOrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("close_work_order");
        let result = sqlx::query_as::<_, WorkOrderEntity>(
            r#"
            UPDATE work_orders SET
                pending = FALSE,
                finished_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a work order (partial update).
    ///
    /// `None` leaves a field untouched. For the nullable columns `Some(None)`
    /// clears the value.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i64,
        quantity: Option<i32>,
        finished_at: Option<Option<DateTime<Utc>>>,
        pending: Option<bool>,
        intermediate_process: Option<bool>,
        technician_id: Option<Option<i64>>,
        notes: Option<Option<&str>>,
    ) -> Result<Option<WorkOrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_work_order");
        let result = sqlx::query_as::<_, WorkOrderEntity>(
            r#"
            UPDATE work_orders SET
                quantity = COALESCE($2, quantity),
                finished_at = CASE WHEN $3::boolean THEN $4 ELSE finished_at END,
                pending = COALESCE($5, pending),
                intermediate_process = COALESCE($6, intermediate_process),
                technician_id = CASE WHEN $7::boolean THEN $8 ELSE technician_id END,
                notes = CASE WHEN $9::boolean THEN $10 ELSE notes END
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(quantity)
        .bind(finished_at.is_some())
        .bind(finished_at.flatten())
        .bind(pending)
        .bind(intermediate_process)
        .bind(technician_id.is_some())
        .bind(technician_id.flatten())
        .bind(notes.is_some())
        .bind(notes.flatten())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

fn is_code_collision(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.constraint() == Some(CODE_CONSTRAINT))
}

/// Code stored when the derived code is unavailable. Never collides with a derived code.
fn placeholder_code() -> String {
    format!("{}TMP-{}", WORK_ORDER_CODE_PREFIX, Uuid::new_v4().simple())
}
